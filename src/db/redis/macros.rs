/// Read-through caching for an async computation.
///
/// Returns the cached value on a hit. On a miss, or when Redis cannot be
/// read, awaits `$block`, queues the result for caching and returns it.
///
/// ```rust,ignore
/// let players: Vec<PlayerRecord> =
///     cached!(cache, CacheKey::Catalog("players".into()), 300, store.load_players())?;
/// ```
#[macro_export]
macro_rules! cached {
    ($cache:expr, $key:expr, $ttl:expr, $block:expr) => {{
        let key = $key;
        match $cache.get_from_cache(&key).await {
            Ok(Some(cached)) => {
                tracing::debug!(key = %key, "Cache hit");
                Ok(cached)
            }
            lookup => {
                match lookup {
                    Err(e) => tracing::warn!(error = %e, key = %key, "Cache read failed, using source"),
                    Ok(_) => tracing::debug!(key = %key, "Cache miss"),
                }
                match $block.await {
                    Ok(value) => {
                        $cache.set_in_background(&key, &value, $ttl);
                        Ok(value)
                    }
                    Err(e) => Err(e),
                }
            }
        }
    }};
}
