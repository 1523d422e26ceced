use dashmap::DashMap;

use super::conversation::Conversation;

/// Lifecycle manager for per-chat [`Conversation`]s, keyed by chat id.
///
/// Mutation goes through [`Conversations::update`], whose closure is
/// synchronous so the shard lock is never held across an `.await`.
#[derive(Debug, Default)]
pub struct Conversations {
    inner: DashMap<i64, Conversation>,
}

impl Conversations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a chat's context (a fresh one if the chat is unknown).
    pub fn context(&self, chat_id: i64) -> Conversation {
        self.inner.get(&chat_id).map(|c| c.value().clone()).unwrap_or_default()
    }

    /// Runs `f` against the chat's context, creating it on first use.
    pub fn update<R>(&self, chat_id: i64, f: impl FnOnce(&mut Conversation) -> R) -> R {
        let mut entry = self.inner.entry(chat_id).or_default();
        f(entry.value_mut())
    }

    /// Number of chats seen so far.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
