//! Application context for managing shared application state.

use std::sync::Arc;

use arc_swap::{ArcSwap, Guard};
use tracing::info;

use crate::config::ConfigRecord;
use crate::shutdown::ShutdownFlag;
use crate::Error;

/// Central application context holding the configuration record and
/// the shutdown flag.
///
/// The record is built once at startup and shared read-only from
/// then on. If the embedding system re-reads configuration at
/// runtime, [`reload`](Self::reload) swaps in a *whole new* record
/// atomically; readers either see the old record or the new one,
/// never a partially updated mix.
///
/// ## Example
///
/// ```no_run
/// use envrec::{AppContext, config::{ConfigSchema, Loader, ProcessEnv, TypeTag}};
///
/// let schema = ConfigSchema::builder()
///     .required("PORT", TypeTag::Int)
///     .build();
/// let record = Loader::new(schema).with_source(ProcessEnv).load()?;
///
/// let ctx = AppContext::builder().with_config(record).build()?;
/// let port = ctx.config().get_int("PORT");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct AppContext {
    config: ArcSwap<ConfigRecord>,
    shutdown: ShutdownFlag,
}

impl AppContext {
    /// Creates a new builder for constructing an `AppContext`.
    pub fn builder() -> AppContextBuilder {
        AppContextBuilder {
            config: None,
            shutdown: None,
        }
    }

    /// Returns the current configuration record.
    ///
    /// The returned guard dereferences to `ConfigRecord`; reads are
    /// lock-free and cheap enough for hot paths.
    pub fn config(&self) -> Guard<Arc<ConfigRecord>> {
        self.config.load()
    }

    /// Replaces the configuration with a freshly built record.
    ///
    /// The swap is atomic. Existing guards keep the record they
    /// loaded; new reads see the replacement.
    pub fn reload(&self, record: ConfigRecord) {
        self.config.store(Arc::new(record));
        info!("configuration record reloaded");
    }

    /// The process-wide shutdown flag.
    pub fn shutdown(&self) -> &ShutdownFlag {
        &self.shutdown
    }
}

/// Builder for constructing an [`AppContext`].
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct AppContextBuilder {
    config: Option<ConfigRecord>,
    shutdown: Option<ShutdownFlag>,
}

impl AppContextBuilder {
    /// Attaches the configuration record, usually the result of
    /// [`Loader::load`](crate::config::Loader::load).
    pub fn with_config(mut self, record: ConfigRecord) -> Self {
        self.config = Some(record);
        self
    }

    /// Attaches an existing shutdown flag (for example one already
    /// registered with a signal handler). A fresh, untripped flag is
    /// used when none is given.
    pub fn with_shutdown(mut self, flag: ShutdownFlag) -> Self {
        self.shutdown = Some(flag);
        self
    }

    /// Builds the `AppContext`.
    ///
    /// Returns an error if no configuration was provided.
    pub fn build(self) -> Result<AppContext, Error> {
        let config = self.config.ok_or(Error::MissingConfig)?;
        Ok(AppContext {
            config: ArcSwap::from_pointee(config),
            shutdown: self.shutdown.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigSchema, Loader, MapSource, TypeTag};

    fn record(port: &str) -> ConfigRecord {
        let schema = ConfigSchema::builder()
            .required("PORT", TypeTag::Int)
            .build();
        Loader::new(schema)
            .with_source(MapSource::from([("PORT", port)]))
            .load()
            .unwrap()
    }

    #[test]
    fn test_build_requires_config() {
        assert!(matches!(
            AppContext::builder().build(),
            Err(Error::MissingConfig)
        ));
    }

    #[test]
    fn test_config_read() {
        let ctx = AppContext::builder()
            .with_config(record("8080"))
            .build()
            .unwrap();
        assert_eq!(ctx.config().get_int("PORT"), Some(8080));
    }

    #[test]
    fn test_reload_swaps_whole_record() {
        let ctx = AppContext::builder()
            .with_config(record("8080"))
            .build()
            .unwrap();

        let before = ctx.config();
        ctx.reload(record("9090"));

        // The old guard still sees the record it loaded.
        assert_eq!(before.get_int("PORT"), Some(8080));
        // New reads see the replacement.
        assert_eq!(ctx.config().get_int("PORT"), Some(9090));
    }

    #[test]
    fn test_shutdown_flag_shared() {
        let flag = ShutdownFlag::new();
        let ctx = AppContext::builder()
            .with_config(record("8080"))
            .with_shutdown(flag.clone())
            .build()
            .unwrap();

        assert!(!ctx.shutdown().is_requested());
        flag.request();
        assert!(ctx.shutdown().is_requested());
    }
}
