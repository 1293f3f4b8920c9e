//! In-memory fakes for the catalog and backing-store contracts.
//!
//! One `FakeBackend` plays all three collaborators so a test can wire a
//! whole editor session against it. Failure flags let tests induce
//! backend errors per operation family.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use edumedia_core::annotation::{AnnotationKind, AnnotationLinkStore, LinkRow, NewLink};
use edumedia_core::catalog::{AssetCatalog, AssetRef};
use edumedia_core::error::CoreError;
use edumedia_core::hotspot::{Hotspot, HotspotPayload, HotspotStore, NewHotspot};
use edumedia_core::types::DbId;

#[derive(Debug, Clone)]
struct StoredLink {
    id: DbId,
    video_id: DbId,
    timestamp_seconds: i32,
    reference: DbId,
}

#[derive(Default)]
pub struct FakeBackend {
    assets: Mutex<HashMap<(AnnotationKind, DbId), String>>,
    links: Mutex<Vec<(AnnotationKind, StoredLink)>>,
    hotspots: Mutex<Vec<Hotspot>>,
    next_id: AtomicI64,
    pub fail_link_deletes: AtomicBool,
    pub fail_link_inserts: AtomicBool,
    pub fail_hotspot_inserts: AtomicBool,
    pub fail_hotspot_updates: AtomicBool,
    pub fail_hotspot_deletes: AtomicBool,
    pub hotspot_insert_calls: AtomicUsize,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc(&self) -> DbId {
        self.next_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn add_asset(&self, kind: AnnotationKind, name: &str) -> DbId {
        let id = self.alloc();
        self.assets
            .lock()
            .unwrap()
            .insert((kind, id), name.to_string());
        id
    }

    pub fn add_audio(&self, name: &str) -> DbId {
        self.add_asset(AnnotationKind::Audio, name)
    }

    pub fn add_picbook(&self, name: &str) -> DbId {
        self.add_asset(AnnotationKind::Picbook, name)
    }

    /// Video assets double as annotatable parent videos.
    pub fn add_video(&self, name: &str) -> DbId {
        self.add_asset(AnnotationKind::Video, name)
    }

    /// Simulate an asset deleted out from under existing links.
    pub fn remove_asset(&self, kind: AnnotationKind, id: DbId) {
        self.assets.lock().unwrap().remove(&(kind, id));
    }

    /// `(timestamp_seconds, reference)` pairs persisted for one kind,
    /// in insertion order.
    pub fn links_of(&self, kind: AnnotationKind, video_id: DbId) -> Vec<(i32, DbId)> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, link)| *k == kind && link.video_id == video_id)
            .map(|(_, link)| (link.timestamp_seconds, link.reference))
            .collect()
    }

    pub fn total_links(&self, video_id: DbId) -> usize {
        self.links
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, link)| link.video_id == video_id)
            .count()
    }

    pub fn hotspot_count(&self) -> usize {
        self.hotspots.lock().unwrap().len()
    }

    pub fn stored_hotspot(&self, id: DbId) -> Option<Hotspot> {
        self.hotspots
            .lock()
            .unwrap()
            .iter()
            .find(|h| h.id == id)
            .cloned()
    }
}

#[async_trait]
impl AssetCatalog for FakeBackend {
    async fn list_audio(&self) -> Result<Vec<AssetRef>, CoreError> {
        Ok(self.list_kind(AnnotationKind::Audio))
    }

    async fn list_videos(&self, exclude: Option<DbId>) -> Result<Vec<AssetRef>, CoreError> {
        Ok(self
            .list_kind(AnnotationKind::Video)
            .into_iter()
            .filter(|a| Some(a.id) != exclude)
            .collect())
    }

    async fn list_picbooks(&self) -> Result<Vec<AssetRef>, CoreError> {
        Ok(self.list_kind(AnnotationKind::Picbook))
    }

    async fn find(&self, kind: AnnotationKind, id: DbId) -> Result<Option<AssetRef>, CoreError> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .get(&(kind, id))
            .map(|name| AssetRef {
                id,
                name: name.clone(),
            }))
    }
}

impl FakeBackend {
    fn list_kind(&self, kind: AnnotationKind) -> Vec<AssetRef> {
        let mut assets: Vec<AssetRef> = self
            .assets
            .lock()
            .unwrap()
            .iter()
            .filter(|((k, _), _)| *k == kind)
            .map(|((_, id), name)| AssetRef {
                id: *id,
                name: name.clone(),
            })
            .collect();
        assets.sort_by_key(|a| a.id);
        assets
    }
}

#[async_trait]
impl AnnotationLinkStore for FakeBackend {
    async fn parent_exists(&self, video_id: DbId) -> Result<bool, CoreError> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .contains_key(&(AnnotationKind::Video, video_id)))
    }

    async fn list(&self, kind: AnnotationKind, video_id: DbId) -> Result<Vec<LinkRow>, CoreError> {
        let assets = self.assets.lock().unwrap();
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, link)| *k == kind && link.video_id == video_id)
            .map(|(_, link)| LinkRow {
                id: link.id,
                video_id: link.video_id,
                timestamp_seconds: link.timestamp_seconds,
                reference: link.reference,
                name: assets.get(&(kind, link.reference)).cloned(),
                created_at: Utc::now(),
            })
            .collect())
    }

    async fn delete_for_video(
        &self,
        kind: AnnotationKind,
        video_id: DbId,
    ) -> Result<(), CoreError> {
        if self.fail_link_deletes.load(Ordering::SeqCst) {
            return Err(CoreError::Persistence("induced delete failure".to_string()));
        }
        self.links
            .lock()
            .unwrap()
            .retain(|(k, link)| !(*k == kind && link.video_id == video_id));
        Ok(())
    }

    async fn insert_many(&self, kind: AnnotationKind, rows: &[NewLink]) -> Result<(), CoreError> {
        if self.fail_link_inserts.load(Ordering::SeqCst) {
            return Err(CoreError::Persistence("induced insert failure".to_string()));
        }
        let mut links = self.links.lock().unwrap();
        for row in rows {
            let id = self.alloc();
            links.push((
                kind,
                StoredLink {
                    id,
                    video_id: row.video_id,
                    timestamp_seconds: row.timestamp_seconds,
                    reference: row.reference,
                },
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl HotspotStore for FakeBackend {
    async fn list_page(
        &self,
        picbook_id: DbId,
        page_index: i32,
    ) -> Result<Vec<Hotspot>, CoreError> {
        Ok(self
            .hotspots
            .lock()
            .unwrap()
            .iter()
            .filter(|h| h.picbook_id == picbook_id && h.page_index == page_index)
            .cloned()
            .collect())
    }

    async fn insert(&self, hotspot: &NewHotspot) -> Result<DbId, CoreError> {
        self.hotspot_insert_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_hotspot_inserts.load(Ordering::SeqCst) {
            return Err(CoreError::Persistence("induced insert failure".to_string()));
        }
        let id = self.alloc();
        self.hotspots.lock().unwrap().push(Hotspot {
            id,
            picbook_id: hotspot.picbook_id,
            page_index: hotspot.page_index,
            x: hotspot.x,
            y: hotspot.y,
            payload: hotspot.payload.clone(),
        });
        Ok(id)
    }

    async fn update_payload(&self, id: DbId, payload: &HotspotPayload) -> Result<(), CoreError> {
        if self.fail_hotspot_updates.load(Ordering::SeqCst) {
            return Err(CoreError::Persistence("induced update failure".to_string()));
        }
        if let Some(hotspot) = self.hotspots.lock().unwrap().iter_mut().find(|h| h.id == id) {
            hotspot.payload = payload.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        if self.fail_hotspot_deletes.load(Ordering::SeqCst) {
            return Err(CoreError::Persistence("induced delete failure".to_string()));
        }
        self.hotspots.lock().unwrap().retain(|h| h.id != id);
        Ok(())
    }
}
