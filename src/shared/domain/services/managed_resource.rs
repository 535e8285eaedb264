use async_trait::async_trait;

use crate::shared::domain::model::resource_schema::ResourceSchema;

/// Result of refreshing a resource from the remote system.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ReadOutcome<S> {
    Present(S),
    /// The remote object is gone; the host should drop the stored identifier.
    Removed,
}

impl<S> ReadOutcome<S> {
    pub fn into_state(self) -> Option<S> {
        match self {
            Self::Present(state) => Some(state),
            Self::Removed => None,
        }
    }
}

/// Lifecycle contract a plugin host drives for one resource type.
#[async_trait]
pub trait ManagedResource: Send + Sync {
    type Config: Send + 'static;
    type State: Send + 'static;
    type Error: Send + 'static;

    fn schema(&self) -> ResourceSchema;

    async fn create(&self, config: Self::Config) -> Result<Self::State, Self::Error>;

    async fn read(&self, id: String) -> Result<ReadOutcome<Self::State>, Self::Error>;

    async fn delete(&self, id: String) -> Result<(), Self::Error>;

    async fn import(&self, id: String) -> Result<Self::State, Self::Error>;
}
