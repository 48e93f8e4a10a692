//! Path pattern parsing.
//!
//! # Responsibilities
//! - Parse a declared path into literal and `:param` segments
//! - Expose parameter names so dynamic routes provably carry their
//!   placeholders (e.g. `:id`) to the router
//!
//! # Design Decisions
//! - Patterns are validated, never matched — matching is the router's job
//! - No wildcards or regex; literals and named parameters only

/// One segment of a parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Literal text matched verbatim by the router.
    Literal(String),
    /// Named dynamic segment (`:id`); the router supplies the concrete
    /// value to the resolved view.
    Param(String),
}

/// Error type for pattern parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' must start with '/'")]
    MissingLeadingSlash { pattern: String },

    #[error("pattern '{pattern}' contains an empty segment")]
    EmptySegment { pattern: String },

    #[error("pattern '{pattern}' has a parameter with no name")]
    UnnamedParam { pattern: String },

    #[error("pattern '{pattern}' declares parameter '{name}' more than once")]
    DuplicateParam { pattern: String, name: String },
}

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    raw: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse and validate a declared path.
    ///
    /// `/` parses to an empty segment list; `/kb/:id` parses to a literal
    /// followed by the `id` parameter.
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let raw = pattern.to_string();

        let Some(rest) = pattern.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash { pattern: raw });
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for piece in rest.split('/') {
                if piece.is_empty() {
                    return Err(PatternError::EmptySegment { pattern: raw });
                }
                if let Some(name) = piece.strip_prefix(':') {
                    if name.is_empty() {
                        return Err(PatternError::UnnamedParam { pattern: raw });
                    }
                    if segments.contains(&Segment::Param(name.to_string())) {
                        return Err(PatternError::DuplicateParam {
                            pattern: raw,
                            name: name.to_string(),
                        });
                    }
                    segments.push(Segment::Param(name.to_string()));
                } else {
                    segments.push(Segment::Literal(piece.to_string()));
                }
            }
        }

        Ok(Self { raw, segments })
    }

    /// The pattern exactly as declared.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Parsed segments in path order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Names of dynamic segments, in path order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// True if the pattern has at least one dynamic segment.
    pub fn is_dynamic(&self) -> bool {
        !self.param_names().is_empty()
    }
}
