//! Idempotent registration of screens in the navigation registry file.
//!
//! The registry is `src/navigation/AppNavigator.tsx`, generated with two
//! literal markers: one inside the route-param type, one inside the screen
//! list. Registration is insert-if-absent text patching at those markers;
//! every insertion is guarded by a substring check, so applying the same
//! registration twice yields a byte-identical file. There is no unregister
//! operation: deleting a feature leaves its entries behind.
//!
//! Silent-failure modes are deliberate: a missing registry file or a
//! manually removed marker turns the corresponding step into a no-op.

use std::path::Path;

use tracing::{debug, instrument};

use crate::application::ports::Filesystem;
use crate::domain::FeatureName;
use crate::error::CoreResult;

/// Registry file path, relative to the project root.
pub const NAV_FILE: &str = "src/navigation/AppNavigator.tsx";

const PARAMS_MARKER: &str = "// Define your route params here";
const SCREENS_MARKER: &str = "{/* Add your screens here */}";

/// One route to register: a screen name and the component identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRoute {
    pub name: String,
    pub component: String,
}

impl ScreenRoute {
    fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let component = format!("{name}Screen");
        Self { name, component }
    }
}

/// A pending navigation registration: import lines plus the routes they make
/// available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationEntry {
    /// Full import block, one or more lines. The presence guard checks the
    /// first line only.
    pub imports: String,
    pub routes: Vec<ScreenRoute>,
}

impl NavigationEntry {
    /// Entry for a single feature screen living under
    /// `src/features/<snake>/<screen_dir>/`.
    pub fn feature_screen(name: &FeatureName, screen_dir: &str) -> Self {
        let pascal = name.pascal();
        let snake = name.snake();
        Self {
            imports: format!(
                "import {{ {pascal}Screen }} from '../features/{snake}/{screen_dir}/{pascal}Screen';"
            ),
            routes: vec![ScreenRoute::new(pascal)],
        }
    }

    /// Entry for a standalone screen at an explicit import path
    /// (no feature association).
    pub fn standalone_screen(pascal: &str, import_path: &str) -> Self {
        Self {
            imports: format!("import {{ {pascal}Screen }} from '{import_path}';"),
            routes: vec![ScreenRoute::new(pascal)],
        }
    }

    /// The `auth` feature registers a Login/Register pair.
    pub fn auth_screens(screen_dir: &str) -> Self {
        Self {
            imports: format!(
                "import {{ LoginScreen }} from '../features/auth/{screen_dir}/LoginScreen';\nimport {{ RegisterScreen }} from '../features/auth/{screen_dir}/RegisterScreen';"
            ),
            routes: vec![ScreenRoute::new("Login"), ScreenRoute::new("Register")],
        }
    }
}

/// Apply a registration to registry file contents. Pure; the result is
/// stable under re-application.
pub fn apply(contents: &str, entry: &NavigationEntry) -> String {
    let mut contents = contents.to_string();

    // 1. Imports: prepended as a block, guarded by the first line.
    let guard = entry.imports.lines().next().unwrap_or_default();
    if !guard.is_empty() && !contents.contains(guard) {
        contents = format!("{}\n{contents}", entry.imports);
    }

    // 2. Route params: inserted after the marker. Reverse order so the
    //    final text reads in declaration order.
    for route in entry.routes.iter().rev() {
        let param = format!("{}: undefined", route.name);
        if !contents.contains(&param) {
            contents = contents.replace(
                PARAMS_MARKER,
                &format!("{PARAMS_MARKER}\n  {param};"),
            );
        }
    }

    // 3. Screen declarations: inserted before the marker.
    for route in entry.routes.iter() {
        let guard = format!("name=\"{}\"", route.name);
        if !contents.contains(&guard) {
            let decl = format!(
                "<Stack.Screen name=\"{}\" component={{{}}} />",
                route.name, route.component
            );
            contents = contents.replace(SCREENS_MARKER, &format!("{decl}\n        {SCREENS_MARKER}"));
        }
    }

    contents
}

/// Patch the registry file under `root`. No-op if the file does not exist.
#[instrument(skip(fs, entry), fields(root = %root.display()))]
pub fn register(fs: &dyn Filesystem, root: &Path, entry: &NavigationEntry) -> CoreResult<()> {
    let nav_path = root.join(NAV_FILE);
    let Some(contents) = fs.read_file(&nav_path)? else {
        debug!("navigation registry not found, skipping registration");
        return Ok(());
    };

    let patched = apply(&contents, entry);
    if patched != contents {
        fs.write_file(&nav_path, &patched)?;
        debug!("navigation registry updated");
    }
    Ok(())
}
