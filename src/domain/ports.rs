use crate::domain::model::Entry;

/// Read access to catalog entries; the resolver's only data source.
pub trait EntryLookup: Send + Sync {
    fn lookup(&self, name: &str) -> Option<&Entry>;
}

pub trait ConfigProvider: Send + Sync {
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn json_logs(&self) -> bool;

    fn bind_address(&self) -> String {
        format!("{}:{}", self.host(), self.port())
    }
}
