//! Deployment markers and the static marker catalog.
//!
//! WildFly's deployment scanner signals progress by dropping marker files next
//! to the deployed archive (`app.war.deployed`, `app.war.failed`, ...). The
//! trailing extension identifies the marker.

use std::fmt;

/// Broad phase a marker belongs to, used to pick the message color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerCategory {
    /// Deployment is starting or has succeeded.
    Start,

    /// Deployment is being disabled, skipped or held back.
    End,

    /// Deployment failed.
    Error,
}

impl MarkerCategory {
    /// Severity color attached to notifications for this category.
    pub fn color(self) -> Color {
        match self {
            Self::Start => Color::Good,
            Self::End => Color::Warning,
            Self::Error => Color::Danger,
        }
    }
}

/// Severity color of a chat notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Green.
    Good,

    /// Yellow.
    Warning,

    /// Red.
    Danger,
}

impl Color {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A deployment marker known to the monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Marker {
    /// Identifier used in logs and in the notify allow-list.
    pub name: &'static str,

    /// Phase of the deployment lifecycle.
    pub category: MarkerCategory,

    /// Human readable text sent in notifications.
    pub description: &'static str,
}

impl Marker {
    /// Notification color for this marker.
    pub fn color(&self) -> Color {
        self.category.color()
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

const fn marker(name: &'static str, category: MarkerCategory, description: &'static str) -> Marker {
    Marker {
        name,
        category,
        description,
    }
}

/// Extension token to marker, in the order WildFly documents them.
static CATALOG: [(&str, Marker); 8] = [
    ("dodeploy", marker("DoDeploy", MarkerCategory::Start, "doing deploy")),
    ("skipdeploy", marker("SkipDeploy", MarkerCategory::End, "disable auto-deploy")),
    ("isdeploying", marker("IsDeploying", MarkerCategory::Start, "deploying")),
    ("deployed", marker("Deployed", MarkerCategory::Start, "deployed")),
    ("failed", marker("Failed", MarkerCategory::Error, "deploy failed")),
    ("isundeploying", marker("IsUnDeploying", MarkerCategory::End, "disabling deploy")),
    ("undeployed", marker("UnDeployed", MarkerCategory::End, "disable deploy")),
    ("pending", marker("Pending", MarkerCategory::End, "Pending deploy")),
];

/// Look up the marker for a file extension.
///
/// Unknown extensions return `None`; callers skip those entries.
pub fn lookup(extension: &str) -> Option<&'static Marker> {
    CATALOG
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, marker)| marker)
}

/// Resolve an allow-list entry, which may be an extension token (`failed`)
/// or a marker name (`Failed`).
pub fn find(token: &str) -> Option<&'static Marker> {
    lookup(token).or_else(|| {
        CATALOG
            .iter()
            .find(|(_, marker)| marker.name == token)
            .map(|(_, marker)| marker)
    })
}

/// All `(extension, marker)` pairs of the catalog.
pub fn all() -> impl Iterator<Item = (&'static str, &'static Marker)> {
    CATALOG.iter().map(|(ext, marker)| (*ext, marker))
}
