mod plants;
