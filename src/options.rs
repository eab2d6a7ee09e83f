//! Closed option vocabularies and their validation.
//!
//! Every enumerated setting in the configuration tree belongs to a closed,
//! string-tagged vocabulary. The host store delivers raw strings;
//! [`canonicalize`] is the single entry point that turns a raw string into a
//! typed member, and the only place membership is decided.

use crate::error::InvalidOption;

/// A closed, string-tagged option vocabulary.
///
/// Implemented by every enumerated setting type. `DOMAIN` names the host
/// setting key the vocabulary belongs to (used in diagnostics), `all()` lists
/// the members in declaration order, and `tag()` is the exact wire string for
/// a member. Matching is exact and case-sensitive; there is no coercion.
pub trait ConfigOption: Sized + Copy + 'static {
    /// Host setting key this vocabulary belongs to.
    const DOMAIN: &'static str;

    /// All members, in declaration order.
    fn all() -> &'static [Self];

    /// The exact wire tag for this member.
    fn tag(self) -> &'static str;
}

/// Validate `raw` against the vocabulary `T`.
///
/// Returns the member whose tag equals `raw` exactly, or an [`InvalidOption`]
/// carrying the domain name and the offending value. Callers decide the
/// fallback; this function never substitutes one silently.
pub fn canonicalize<T: ConfigOption>(raw: &str) -> Result<T, InvalidOption> {
    T::all()
        .iter()
        .copied()
        .find(|member| member.tag() == raw)
        .ok_or_else(|| InvalidOption {
            domain: T::DOMAIN,
            raw: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CodeLensCommand, StatusBarCommand};
    use crate::types::{
        BlameHighlightLocation, CodeLensLocation, FileAnnotationKind, HeatmapLocation,
        LineAnnotationKind, OutputLevel, StatusBarAlignment,
    };

    fn assert_identity<T: ConfigOption + PartialEq + std::fmt::Debug>() {
        for member in T::all() {
            assert_eq!(canonicalize::<T>(member.tag()), Ok(*member));
        }
    }

    fn assert_rejects<T: ConfigOption + PartialEq + std::fmt::Debug>(raw: &str) {
        let err = canonicalize::<T>(raw).unwrap_err();
        assert_eq!(err.domain, T::DOMAIN);
        assert_eq!(err.raw, raw);
    }

    #[test]
    fn canonicalize_is_identity_on_every_domain_member() {
        assert_identity::<FileAnnotationKind>();
        assert_identity::<LineAnnotationKind>();
        assert_identity::<BlameHighlightLocation>();
        assert_identity::<CodeLensLocation>();
        assert_identity::<HeatmapLocation>();
        assert_identity::<StatusBarAlignment>();
        assert_identity::<OutputLevel>();
        assert_identity::<CodeLensCommand>();
        assert_identity::<StatusBarCommand>();
    }

    #[test]
    fn canonicalize_rejects_non_members() {
        assert_rejects::<FileAnnotationKind>("margin");
        assert_rejects::<CodeLensLocation>("functions");
        assert_rejects::<StatusBarAlignment>("center");
        assert_rejects::<CodeLensCommand>("revlens.doesNotExist");
    }

    #[test]
    fn canonicalize_is_case_sensitive() {
        assert_rejects::<FileAnnotationKind>("Gutter");
        assert_rejects::<BlameHighlightLocation>("overviewruler");
        assert_rejects::<BlameHighlightLocation>("OVERVIEWRULER");
    }

    #[test]
    fn canonicalize_rejects_empty_and_whitespace() {
        assert_rejects::<LineAnnotationKind>("");
        assert_rejects::<LineAnnotationKind>(" trailing");
        assert_rejects::<LineAnnotationKind>("trailing ");
    }
}
