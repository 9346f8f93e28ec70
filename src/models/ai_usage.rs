use serde::Serialize;
use utoipa::ToSchema;

/// Daily AI photo-analysis quota for the authenticated user. `warn` drives
/// the frontend banner once usage reaches 80% of the limit.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiUsage {
    pub used: u32,
    pub limit: u32,
    pub warn: bool,
}

impl AiUsage {
    pub fn new(used: u32, limit: u32) -> Self {
        Self {
            used,
            limit,
            warn: used * 5 >= limit * 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_kicks_in_at_eighty_percent() {
        assert!(!AiUsage::new(7, 10).warn);
        assert!(AiUsage::new(8, 10).warn);
        assert!(AiUsage::new(12, 10).warn);
        assert!(!AiUsage::new(0, 10).warn);
    }
}
