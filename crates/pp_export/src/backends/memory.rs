use async_trait::async_trait;
use pp_core::{PressRelease, ReleaseExporter, Result};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Keeps the last export in memory. Used for dry runs and tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryExporter {
    store: Arc<RwLock<Vec<PressRelease>>>,
}

impl MemoryExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn releases(&self) -> Vec<PressRelease> {
        self.store.read().await.clone()
    }
}

#[async_trait]
impl ReleaseExporter for MemoryExporter {
    async fn export(&self, releases: &[PressRelease]) -> Result<()> {
        let mut store = self.store.write().await;
        *store = releases.to_vec();
        Ok(())
    }

    fn destination(&self) -> String {
        "memory://".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pp_core::Category;

    #[tokio::test]
    async fn test_export_replaces_previous_contents() {
        let release = PressRelease {
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            company: "Merck".to_string(),
            title: "Test".to_string(),
            url: "https://www.merck.com/news/test".to_string(),
            tags: vec![],
            category: Category::Other,
        };

        let exporter = MemoryExporter::new();
        exporter.export(&[release.clone(), release.clone()]).await.unwrap();
        assert_eq!(exporter.releases().await.len(), 2);

        exporter.export(&[release.clone()]).await.unwrap();
        assert_eq!(exporter.releases().await, vec![release]);
    }
}
