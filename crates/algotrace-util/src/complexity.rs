use serde::Serialize;

/// Informational big-O descriptor attached to engine stats.
///
/// Never consulted by any algorithm; it only travels to the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Complexity {
    pub big_o: &'static str,
    pub details: &'static str,
}

impl Complexity {
    pub const fn new(big_o: &'static str, details: &'static str) -> Self {
        Self { big_o, details }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let c = Complexity::new("O(V^2)", "quadratic");
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["bigO"], "O(V^2)");
        assert_eq!(json["details"], "quadratic");
    }
}
