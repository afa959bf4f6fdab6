//! Progressive Web App Configuration
//!
//! The dashboard installs as a PWA on the factory floor's tablets. The
//! build wrapper's options are fixed per release and expressed here as a
//! versioned constant; nothing in this module changes at runtime. The web
//! layer reads [`PwaConfig::CURRENT`] when rendering the shell and serves
//! the manifest from [`web_manifest`].

use serde::Serialize;

/// Fixed options of the PWA build wrapper, versioned with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PwaConfig {
    /// Release the configuration shipped with
    pub version: &'static str,
    /// Directory the wrapper writes service worker artifacts into
    pub output_dir: &'static str,
    /// Register the service worker from the shell
    pub register: bool,
    /// Activate an updated worker without waiting for old tabs to close
    pub skip_waiting: bool,
    /// Cache pages as the user navigates inside the app
    pub cache_on_frontend_nav: bool,
    /// Also pre-cache routes linked from the current page
    pub aggressive_frontend_nav_caching: bool,
    /// Reload the page when connectivity returns
    pub reload_on_online: bool,
    /// Never register the worker in development
    pub disable_in_dev: bool,
    /// Suppress service worker debug logging
    pub disable_dev_logs: bool,
}

impl PwaConfig {
    /// The one shipped configuration.
    pub const CURRENT: PwaConfig = PwaConfig {
        version: env!("CARGO_PKG_VERSION"),
        output_dir: "public",
        register: true,
        skip_waiting: true,
        cache_on_frontend_nav: true,
        aggressive_frontend_nav_caching: true,
        reload_on_online: true,
        disable_in_dev: true,
        disable_dev_logs: true,
    };

    /// Whether the shell should register the service worker.
    pub fn enabled(&self, dev_mode: bool) -> bool {
        self.register && !(self.disable_in_dev && dev_mode)
    }
}

/// Web app manifest served at /manifest.webmanifest
#[derive(Debug, Serialize)]
pub struct WebManifest {
    pub name: &'static str,
    pub short_name: &'static str,
    pub start_url: &'static str,
    pub display: &'static str,
    pub background_color: &'static str,
    pub theme_color: &'static str,
}

/// Build the manifest matching the shipped configuration.
pub fn web_manifest() -> WebManifest {
    WebManifest {
        name: "Gilnokie Goods Management",
        short_name: "Gilnokie GMS",
        start_url: "/dashboard",
        display: "standalone",
        background_color: "#ffffff",
        theme_color: "#1f2937",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_config_is_versioned() {
        let config = PwaConfig::CURRENT;
        assert_eq!(config.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.output_dir, "public");
        assert!(config.register);
        assert!(config.skip_waiting);
        assert!(config.cache_on_frontend_nav);
        assert!(config.aggressive_frontend_nav_caching);
        assert!(config.reload_on_online);
        assert!(config.disable_dev_logs);
    }

    #[test]
    fn test_worker_disabled_in_dev_mode() {
        let config = PwaConfig::CURRENT;
        assert!(config.enabled(false));
        assert!(!config.enabled(true));
    }

    #[test]
    fn test_worker_disabled_when_registration_is_off() {
        let config = PwaConfig {
            register: false,
            ..PwaConfig::CURRENT
        };
        assert!(!config.enabled(false));
    }

    #[test]
    fn test_manifest_starts_at_the_dashboard() {
        let manifest = web_manifest();
        assert_eq!(manifest.start_url, "/dashboard");
        assert_eq!(manifest.short_name, "Gilnokie GMS");
    }
}
