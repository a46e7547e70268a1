use crate::context::Context;

pub trait GlobalCtx {
	fn ctx(&self) -> &Context;
}

pub trait GlobalConfigProvider<C> {
	fn provide_config(&self) -> &C;
}

/// Lets callers pick a config section by type, `global.config::<ApiConfig>()`.
pub trait GlobalConfig {
	#[inline(always)]
	fn config<C>(&self) -> &C
	where
		Self: GlobalConfigProvider<C>,
	{
		GlobalConfigProvider::provide_config(self)
	}
}
