//! Effects - side effects declared by the reducer

/// HTTP requests the runtime performs on behalf of the reducer
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Fetch the first page of the episode listing
    LoadEpisodes,
    /// Fetch a listing page by its absolute URL
    LoadMoreEpisodes { url: String },
    /// Fetch a batch of characters; `ids` is the comma-joined lookup key
    LoadCharacters { episode_id: u32, ids: String },
}
