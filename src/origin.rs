/// Static origin policy, fixed for the lifetime of the process.
///
/// Matching is exact string equality only: no subdomain wildcards and no
/// case folding. An origin that differs from the configured value in case
/// is a different origin.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Origin {
    /// Answer every cross-origin caller with the wildcard token.
    #[default]
    Any,
    /// Mirror the caller's `Origin` header back verbatim.
    Reflect,
    /// Allow a single configured origin.
    Exact(String),
    /// Allow any member of a fixed set of origins.
    List(Vec<String>),
}

/// Per-request outcome of resolving the policy against the `Origin` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OriginDecision {
    /// Emit the literal `*` token.
    Wildcard,
    /// Emit this exact value.
    Value(String),
    /// Emit no allow-origin header. Covers both "no `Origin` header was
    /// sent" and "the origin is not allowed"; the two are observably the
    /// same.
    Skip,
}

impl Origin {
    pub fn any() -> Self {
        Self::Any
    }

    pub fn reflect() -> Self {
        Self::Reflect
    }

    pub fn exact<S: Into<String>>(value: S) -> Self {
        Self::Exact(value.into())
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    pub fn resolve(&self, request_origin: Option<&str>) -> OriginDecision {
        let Some(origin) = request_origin.filter(|value| !value.is_empty()) else {
            return OriginDecision::Skip;
        };

        match self {
            Origin::Any => OriginDecision::Wildcard,
            Origin::Reflect => OriginDecision::Value(origin.to_string()),
            Origin::Exact(value) => {
                if value == origin {
                    OriginDecision::Value(value.clone())
                } else {
                    OriginDecision::Skip
                }
            }
            Origin::List(values) => {
                if values.iter().any(|value| value == origin) {
                    OriginDecision::Value(origin.to_string())
                } else {
                    OriginDecision::Skip
                }
            }
        }
    }

}

impl OriginDecision {
    pub fn is_skip(&self) -> bool {
        matches!(self, OriginDecision::Skip)
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, OriginDecision::Wildcard)
    }

    /// The header value to emit, if any.
    pub fn header_value(&self) -> Option<&str> {
        match self {
            OriginDecision::Wildcard => Some("*"),
            OriginDecision::Value(value) => Some(value),
            OriginDecision::Skip => None,
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
