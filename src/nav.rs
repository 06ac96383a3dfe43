//! Documentation navigation hrefs.

use std::fmt;

/// Location inside the documentation site.
///
/// Each present segment renders as a fixed prefix plus its value, in this
/// order: `/org/`, `/doc/`, `/app/`, `/r/`, `/m/` (method), `/p/`,
/// `/m/` (model), `#` (field). Empty values count as absent.
///
/// ```
/// use apidoc_resolver::NavHref;
///
/// let href = NavHref::new().resource("user").method("GET");
/// assert_eq!(href.build(), "/r/user/m/GET");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavHref {
    pub organization: Option<String>,
    pub documentation: Option<String>,
    pub application: Option<String>,
    pub resource: Option<String>,
    pub method: Option<String>,
    pub path: Option<String>,
    pub model: Option<String>,
    pub field: Option<String>,
}

impl NavHref {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = Some(organization.into());
        self
    }

    pub fn documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn application(mut self, application: impl Into<String>) -> Self {
        self.application = Some(application.into());
        self
    }

    pub fn resource(mut self, resource: impl Into<String>) -> Self {
        self.resource = Some(resource.into());
        self
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Render the href. Method and model share the `/m/` prefix.
    pub fn build(&self) -> String {
        self.to_string()
    }

    fn segments(&self) -> [(&'static str, Option<&str>); 8] {
        [
            ("/org/", self.organization.as_deref()),
            ("/doc/", self.documentation.as_deref()),
            ("/app/", self.application.as_deref()),
            ("/r/", self.resource.as_deref()),
            ("/m/", self.method.as_deref()),
            ("/p/", self.path.as_deref()),
            ("/m/", self.model.as_deref()),
            ("#", self.field.as_deref()),
        ]
    }
}

impl fmt::Display for NavHref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (prefix, value) in self.segments() {
            match value {
                Some(value) if !value.is_empty() => write!(f, "{}{}", prefix, value)?,
                _ => {}
            }
        }
        Ok(())
    }
}

/// Something that can move the documentation view to a new path.
pub trait Navigator {
    fn navigate(&mut self, path: &str);
}

/// The UI event that triggered a navigation.
pub trait NavEvent {
    fn stop_propagation(&mut self);
}

/// Navigate to `href` and stop the event from reaching enclosing nodes.
///
/// Documentation nodes nest inside other clickable nodes, so a click must
/// not also trigger the parent's navigation.
pub fn follow_href<N, E>(navigator: &mut N, event: &mut E, href: &str)
where
    N: Navigator + ?Sized,
    E: NavEvent + ?Sized,
{
    tracing::debug!(href, "navigating");
    navigator.navigate(href);
    event.stop_propagation();
}
