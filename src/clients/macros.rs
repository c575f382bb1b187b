/// Generate the lookup and removal methods every store client shares.
///
/// The client must have an `inner: ResourceClient<$entity>` field and a
/// `latency: LatencyConfig` field.
#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $error:ty, $entity_name_snake:ident) => {
        paste::paste! {
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](&self, id: String) -> Result<Option<$entity>, $error> {
                    $crate::config::simulate_latency(self.latency.read()).await;
                    tracing::debug!("Sending request");
                    self.inner.get(id).await.map_err(<$error>::from)
                }

                #[tracing::instrument(skip(self))]
                pub async fn [<delete_ $entity_name_snake>](&self, id: String) -> Result<(), $error> {
                    $crate::config::simulate_latency(self.latency.delete()).await;
                    tracing::debug!("Sending request");
                    match self.inner.delete(id).await.map_err(<$error>::from) {
                        Ok(()) => {
                            tracing::info!(entity = stringify!($entity_name_snake), "Record deleted");
                            Ok(())
                        }
                        Err(e) => {
                            tracing::warn!(entity = stringify!($entity_name_snake), error = %e, "Delete failed");
                            Err(e)
                        }
                    }
                }
            }
        }
    };
}
