use url::Url;

/// Destination origin for every outbound `postMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetOrigin {
    /// A concrete ancestor origin, serialized as `scheme://host[:port]`.
    Exact(String),
    /// The `*` wildcard.
    #[default]
    Any,
}

impl TargetOrigin {
    /// Picks the delivery target from `location.ancestorOrigins`.
    ///
    /// The first reported origin wins when it is a tuple origin. Opaque
    /// origins (`"null"`) and unparsable values fall back to the wildcard,
    /// as does an empty list.
    pub fn resolve<S: AsRef<str>>(ancestor_origins: &[S]) -> Self {
        let Some(first) = ancestor_origins.first() else {
            return TargetOrigin::Any;
        };
        match Url::parse(first.as_ref().trim()) {
            Ok(url) => {
                let origin = url.origin();
                if origin.is_tuple() {
                    TargetOrigin::Exact(origin.ascii_serialization())
                } else {
                    TargetOrigin::Any
                }
            }
            Err(_) => TargetOrigin::Any,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TargetOrigin::Exact(origin) => origin,
            TargetOrigin::Any => "*",
        }
    }
}
