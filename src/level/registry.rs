//! Per-level display name, default template and default color.
//!
//! Each logger owns its own registry, seeded with the built-in levels. Lookups
//! never fail: an id nobody registered still gets a name (its decimal value),
//! a template (`"[<name>] %s"`) and a color (identity).

use super::Level;
use crate::fmt::{Ansi, FormatTemplate, Identity, Paint};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

static IDENTITY: Identity = Identity;

/// Optional extras for [`LevelRegistry::register`].
#[derive(Clone, Default)]
pub struct LevelOptions {
    pub format: Option<String>,
    pub color: Option<Arc<dyn Paint>>,
}

impl LevelOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Without one the level renders as `"[<name>] %s"`.
    #[must_use]
    pub fn format(mut self, template: impl Into<String>) -> Self {
        self.format = Some(template.into());
        self
    }

    #[must_use]
    pub fn color(mut self, paint: impl Paint + 'static) -> Self {
        self.color = Some(Arc::new(paint));
        self
    }
}

impl fmt::Debug for LevelOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelOptions")
            .field("format", &self.format)
            .field("color", &self.color.is_some())
            .finish()
    }
}

/// Name, template and color per level id, plus a lowercase name index.
///
/// Re-registering a name moves it to the newest level. The level that held it
/// before keeps its display name but is no longer found by that name.
#[derive(Clone)]
pub struct LevelRegistry {
    names: HashMap<Level, String>,
    by_name: HashMap<String, Level>,
    templates: HashMap<Level, FormatTemplate>,
    colors: HashMap<Level, Arc<dyn Paint>>,
}

impl Default for LevelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl LevelRegistry {
    /// Registry seeded with debug, warn, info, error and important.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(
            Level::DEBUG,
            "debug",
            LevelOptions::new().format("[debug] %s").color(Ansi::YELLOW),
        );
        registry.register(
            Level::WARN,
            "warn",
            LevelOptions::new()
                .format("[warn] %s")
                .color(Ansi::YELLOW_BOLD),
        );
        registry.register(
            Level::INFO,
            "info",
            LevelOptions::new()
                .format("[+] %s {{suffix}}")
                .color(Ansi::CYAN),
        );
        registry.register(
            Level::ERROR,
            "error",
            LevelOptions::new()
                .format("[-] %s {{suffix}}")
                .color(Ansi::RED_BOLD),
        );
        registry.register(
            Level::IMPORTANT,
            "important",
            LevelOptions::new()
                .format("[*] %s {{suffix}}")
                .color(Ansi::PURPLE_BOLD),
        );
        registry
    }

    /// Registry with no levels at all; every lookup takes the fallback path.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            names: HashMap::new(),
            by_name: HashMap::new(),
            templates: HashMap::new(),
            colors: HashMap::new(),
        }
    }

    /// Inserts or overwrites `level`. Without a format the level gets the
    /// generic `"[<name>] %s"`, replacing any template a previous registration set.
    pub fn register(&mut self, level: Level, name: impl Into<String>, options: LevelOptions) {
        let name = name.into();
        let template = options.format.map_or_else(
            || FormatTemplate::generic(&name),
            |f| FormatTemplate::parse(&f),
        );
        self.templates.insert(level, template);
        if let Some(color) = options.color {
            self.colors.insert(level, color);
        }
        if let Some(previous) = self.names.get(&level) {
            let key = previous.to_lowercase();
            if self.by_name.get(&key) == Some(&level) {
                self.by_name.remove(&key);
            }
        }
        self.by_name.insert(name.to_lowercase(), level);
        self.names.insert(level, name);
    }

    /// Whether `level` was registered, as opposed to resolving through fallbacks.
    #[must_use]
    pub fn is_registered(&self, level: Level) -> bool {
        self.names.contains_key(&level)
    }

    /// Registered name, or the decimal id.
    #[must_use]
    pub fn resolve_name(&self, level: Level) -> Cow<'_, str> {
        self.names.get(&level).map_or_else(
            || Cow::Owned(level.value().to_string()),
            |name| Cow::Borrowed(name.as_str()),
        )
    }

    #[must_use]
    pub fn resolve_template(&self, level: Level) -> Cow<'_, FormatTemplate> {
        self.templates.get(&level).map_or_else(
            || Cow::Owned(FormatTemplate::generic(&self.resolve_name(level))),
            Cow::Borrowed,
        )
    }

    /// Registered painter, or identity.
    #[must_use]
    pub fn resolve_color(&self, level: Level) -> &dyn Paint {
        match self.colors.get(&level) {
            Some(color) => color.as_ref(),
            None => &IDENTITY,
        }
    }

    /// Looks a level up by its registered name, case-insensitively. When a name
    /// was registered more than once, the latest registration answers.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<Level> {
        self.by_name.get(&name.to_lowercase()).copied()
    }

    /// Registered levels in ascending order.
    #[must_use]
    pub fn levels(&self) -> Vec<Level> {
        let mut levels: Vec<Level> = self.names.keys().copied().collect();
        levels.sort_unstable();
        levels
    }
}

impl fmt::Debug for LevelRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.names.iter().collect();
        entries.sort_unstable_by_key(|(level, _)| **level);
        f.debug_struct("LevelRegistry")
            .field("levels", &entries)
            .finish_non_exhaustive()
    }
}
