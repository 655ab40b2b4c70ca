/// Group allow-list policy.
///
/// An empty allow-list is not "deny everything": it admits any caller whose
/// token verified, whatever its groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatePolicy {
    AllowAll,
    AnyOfGroups(Vec<String>),
}

impl GatePolicy {
    pub fn from_allowed<I, S>(allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed: Vec<String> = allowed.into_iter().map(Into::into).collect();
        if allowed.is_empty() {
            Self::AllowAll
        } else {
            Self::AnyOfGroups(allowed)
        }
    }

    pub fn allowed_groups(&self) -> &[String] {
        match self {
            Self::AllowAll => &[],
            Self::AnyOfGroups(allowed) => allowed,
        }
    }

    /// Exact, case-sensitive match; a single shared group is enough.
    pub fn permits(&self, groups: &[String]) -> bool {
        match self {
            Self::AllowAll => true,
            Self::AnyOfGroups(allowed) => groups.iter().any(|g| allowed.contains(g)),
        }
    }
}
