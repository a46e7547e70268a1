use sqlx::{Executor, PgPool};

struct Migration {
	version: i32,
	name: &'static str,
	up: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
	version: 1,
	name: "create_plants",
	up: include_str!("../../migrations/0001_create_plants.sql"),
}];

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
	#[error("database error: {0}")]
	Database(#[from] sqlx::Error),
	#[error("database is at version {current}, but only {available} migrations are available")]
	Ahead { current: i32, available: usize },
}

async fn current_version(db: &PgPool) -> Result<i32, MigrationError> {
	db.execute("CREATE TABLE IF NOT EXISTS forest_migrations (version INTEGER NOT NULL)")
		.await?;

	let version = sqlx::query_scalar::<_, i32>("SELECT version FROM forest_migrations")
		.fetch_optional(db)
		.await?;

	match version {
		Some(version) => Ok(version),
		None => {
			tracing::info!("initializing migration table");
			sqlx::query("INSERT INTO forest_migrations (version) VALUES (0)")
				.execute(db)
				.await?;
			Ok(0)
		}
	}
}

#[tracing::instrument(skip(db, migration), fields(name = migration.name, version = migration.version))]
async fn apply(db: &PgPool, migration: &Migration) -> Result<(), MigrationError> {
	tracing::info!("applying migration");

	let mut tx = db.begin().await?;

	// Raw string execution uses the simple query protocol, which allows
	// several statements per migration file.
	(&mut *tx).execute(migration.up).await?;

	sqlx::query("UPDATE forest_migrations SET version = $1")
		.bind(migration.version)
		.execute(&mut *tx)
		.await?;

	tx.commit().await?;

	Ok(())
}

/// Brings the schema up to date. Each migration commits together with the
/// version bump, so a failed migration leaves the previous version in place.
pub async fn run(db: &PgPool) -> Result<(), MigrationError> {
	let current = current_version(db).await?;

	if current as usize > MIGRATIONS.len() {
		return Err(MigrationError::Ahead {
			current,
			available: MIGRATIONS.len(),
		});
	}

	let pending = MIGRATIONS.iter().filter(|m| m.version > current);
	for migration in pending {
		apply(db, migration).await?;
	}

	tracing::info!(version = MIGRATIONS.len(), "database schema up to date");

	Ok(())
}
