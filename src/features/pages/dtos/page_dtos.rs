use serde::Deserialize;

/// Banner flags on `/denunciar` after a redirect
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormBannerQuery {
    pub gracias: Option<String>,
    pub error: Option<String>,
}

impl FormBannerQuery {
    pub fn submitted(&self) -> bool {
        is_set(self.gracias.as_deref())
    }

    pub fn failed(&self) -> bool {
        is_set(self.error.as_deref())
    }
}

fn is_set(flag: Option<&str>) -> bool {
    flag.map(str::trim) == Some("1")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_flags() {
        let query = FormBannerQuery {
            gracias: Some("1".to_string()),
            error: Some("0".to_string()),
        };
        assert!(query.submitted());
        assert!(!query.failed());
        assert!(!FormBannerQuery::default().submitted());
    }
}
