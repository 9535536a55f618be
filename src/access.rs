use rusqlite::Connection;

use crate::models::setting;

/// Per-module action flags consumed by the UI layer. The REST controller does
/// not consult these — gating happens where the original app gated, in the
/// view layer.
#[derive(Debug, Clone, Copy)]
pub struct ModuleAccess {
    pub view: bool,
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl ModuleAccess {
    /// Load the flags for a module from settings (`<module>.view` etc.).
    /// Missing settings default to enabled.
    pub fn load(conn: &Connection, module: &str) -> Self {
        let flag = |action: &str| {
            setting::get_value(conn, &format!("{module}.{action}"), "true") == "true"
        };
        ModuleAccess {
            view: flag("view"),
            create: flag("create"),
            update: flag("update"),
            delete: flag("delete"),
        }
    }

    /// True when any row action would render (the action column is shown).
    pub fn any(&self) -> bool {
        self.view || self.update || self.delete
    }
}
