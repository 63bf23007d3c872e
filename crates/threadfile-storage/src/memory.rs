//! In-memory file store
//!
//! Entries live in a sharded `DashMap`. A write swaps the `Arc` under the
//! shard lock, so a concurrent reader sees either the old or the new file.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use threadfile_core::{DecodedDocument, FileContent, StoredFile, StoredFileMetadata};

use crate::{ConversationFileStore, FileStoreBackend, StoreResult};

#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: DashMap<String, Arc<StoredFile>>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of conversations with a stored file.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    fn lookup(&self, conversation_id: &str) -> Option<Arc<StoredFile>> {
        self.files
            .get(conversation_id)
            .map(|entry| Arc::clone(entry.value()))
    }
}

#[async_trait]
impl ConversationFileStore for MemoryFileStore {
    async fn put(
        &self,
        conversation_id: &str,
        document: DecodedDocument,
    ) -> StoreResult<Arc<StoredFile>> {
        let file = Arc::new(StoredFile::new(document, Utc::now()));
        let replaced = self
            .files
            .insert(conversation_id.to_string(), Arc::clone(&file))
            .is_some();

        tracing::debug!(
            thread_id = %conversation_id,
            file_name = %file.file_name,
            text_length = file.text_length,
            replaced,
            "Stored file for conversation"
        );

        Ok(file)
    }

    async fn get_summary(&self, conversation_id: &str) -> StoreResult<Option<StoredFileMetadata>> {
        Ok(self.lookup(conversation_id).map(|file| file.metadata()))
    }

    async fn get_content(&self, conversation_id: &str) -> StoreResult<Option<FileContent>> {
        Ok(self.lookup(conversation_id).map(|file| file.content()))
    }

    async fn remove(&self, conversation_id: &str) -> StoreResult<bool> {
        let removed = self.files.remove(conversation_id).is_some();
        if removed {
            tracing::debug!(thread_id = %conversation_id, "Removed file for conversation");
        }
        Ok(removed)
    }

    fn backend_type(&self) -> FileStoreBackend {
        FileStoreBackend::Memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use threadfile_core::FileType;

    fn doc(name: &str, text: &str) -> DecodedDocument {
        DecodedDocument::new(name, FileType::Pdf, text)
    }

    #[tokio::test]
    async fn test_unknown_conversation() {
        let store = MemoryFileStore::new();
        assert!(store.get_summary("missing").await.unwrap().is_none());
        assert!(store.get_content("missing").await.unwrap().is_none());
        assert!(!store.remove("missing").await.unwrap());
    }

    #[tokio::test]
    async fn test_put_then_read() {
        let store = MemoryFileStore::new();
        let stored = store.put("t1", doc("a.pdf", "hello there")).await.unwrap();
        assert_eq!(stored.text_length, 11);

        let meta = store.get_summary("t1").await.unwrap().unwrap();
        assert_eq!(meta.file_name, "a.pdf");
        assert_eq!(meta.file_type, FileType::Pdf);
        assert_eq!(meta.text_length, 11);
        assert_eq!(meta.uploaded_at, stored.uploaded_at);

        let content = store.get_content("t1").await.unwrap().unwrap();
        assert_eq!(content.content, "hello there");
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryFileStore::new();
        store.put("t1", doc("first.pdf", "first")).await.unwrap();
        store
            .put("t1", DecodedDocument::new("second.docx", FileType::Docx, "second"))
            .await
            .unwrap();

        assert_eq!(store.len(), 1);
        let content = store.get_content("t1").await.unwrap().unwrap();
        assert_eq!(content.file_name, "second.docx");
        assert_eq!(content.file_type, FileType::Docx);
        assert_eq!(content.content, "second");
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryFileStore::new();
        store.put("t1", doc("a.pdf", "text")).await.unwrap();
        store.put("t2", doc("b.pdf", "other")).await.unwrap();

        assert!(store.remove("t1").await.unwrap());
        assert!(store.get_summary("t1").await.unwrap().is_none());
        assert!(!store.remove("t1").await.unwrap());
        assert!(store.get_summary("t2").await.unwrap().is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_writers_on_distinct_keys() {
        let store = Arc::new(MemoryFileStore::new());
        let mut handles = Vec::new();
        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let id = format!("thread-{i}");
                store
                    .put(&id, doc("a.pdf", &format!("text {i}")))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len(), 32);
        let content = store.get_content("thread-7").await.unwrap().unwrap();
        assert_eq!(content.content, "text 7");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_same_key_reads_never_see_mixed_files() {
        const ALPHA: (&str, FileType, &str) = ("alpha.pdf", FileType::Pdf, "alpha text");
        const BETA: (&str, FileType, &str) =
            ("beta.docx", FileType::Docx, "beta content, somewhat longer");

        fn put_doc((name, file_type, text): (&str, FileType, &str)) -> DecodedDocument {
            DecodedDocument::new(name, file_type, text)
        }

        let store = Arc::new(MemoryFileStore::new());
        let mut handles = Vec::new();

        for writer in 0..3 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for i in 0..200 {
                    let doc = if (i + writer) % 2 == 0 { ALPHA } else { BETA };
                    store.put("shared", put_doc(doc)).await.unwrap();
                    tokio::task::yield_now().await;
                }
            }));
        }

        {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for _ in 0..100 {
                    store.remove("shared").await.unwrap();
                    tokio::task::yield_now().await;
                }
            }));
        }

        for _ in 0..3 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                for _ in 0..300 {
                    if let Some(content) = store.get_content("shared").await.unwrap() {
                        let seen = (
                            content.file_name.as_str(),
                            content.file_type,
                            content.content.as_str(),
                        );
                        assert!(seen == ALPHA || seen == BETA, "mixed content: {seen:?}");
                    }
                    if let Some(meta) = store.get_summary("shared").await.unwrap() {
                        let expected = match meta.file_name.as_str() {
                            "alpha.pdf" => ALPHA,
                            "beta.docx" => BETA,
                            other => panic!("unexpected file name {other}"),
                        };
                        assert_eq!(meta.file_type, expected.1);
                        assert_eq!(meta.text_length, expected.2.chars().count());
                    }
                    tokio::task::yield_now().await;
                }
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert!(store.len() <= 1);
    }
}
