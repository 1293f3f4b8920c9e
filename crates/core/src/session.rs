//! Transient editor session state.
//!
//! Tracks what the user currently has open: the playback position fed
//! by the external player, which timeline insert panel is active, and at
//! most one hotspot edit draft. Nothing here is persisted; a session
//! owns its state exclusively and dies with the editor window.

use crate::annotation::AnnotationKind;
use crate::error::CoreError;
use crate::hotspot::{Hotspot, HotspotPayload};
use crate::timeline::TimelineEditor;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Hotspot draft
// ---------------------------------------------------------------------------

/// Which payload tab of the hotspot panel is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftTab {
    Text,
    Audio,
    Video,
}

/// Pending edits for the one open hotspot panel.
///
/// The draft keeps all three inputs (text body, audio pick, video pick)
/// the way the panel does, so flipping tabs back and forth does not
/// lose what was typed; only the selected tab decides what a save
/// produces.
#[derive(Debug, Clone)]
pub struct HotspotDraft {
    hotspot_id: DbId,
    tab: DraftTab,
    text: String,
    audio: Option<DbId>,
    video: Option<DbId>,
}

impl HotspotDraft {
    /// Seed a draft from a hotspot's current payload.
    fn from_hotspot(hotspot: &Hotspot) -> Self {
        let mut draft = Self {
            hotspot_id: hotspot.id,
            tab: DraftTab::Text,
            text: String::new(),
            audio: None,
            video: None,
        };
        match &hotspot.payload {
            HotspotPayload::Text { content } => {
                draft.tab = DraftTab::Text;
                draft.text = content.clone();
            }
            HotspotPayload::Audio { audio_id } => {
                draft.tab = DraftTab::Audio;
                draft.audio = Some(*audio_id);
            }
            HotspotPayload::Video { video_id } => {
                draft.tab = DraftTab::Video;
                draft.video = Some(*video_id);
            }
        }
        draft
    }

    pub fn hotspot_id(&self) -> DbId {
        self.hotspot_id
    }

    pub fn tab(&self) -> DraftTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: DraftTab) {
        self.tab = tab;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn select_audio(&mut self, audio: Option<DbId>) {
        self.audio = audio;
    }

    pub fn select_video(&mut self, video: Option<DbId>) {
        self.video = video;
    }

    /// Resolve the draft into the payload a save would persist.
    ///
    /// The media tabs require a selection; saving an audio or video tab
    /// with nothing picked is a validation error rather than a row with
    /// an empty reference.
    pub fn payload(&self) -> Result<HotspotPayload, CoreError> {
        match self.tab {
            DraftTab::Text => Ok(HotspotPayload::Text {
                content: self.text.clone(),
            }),
            DraftTab::Audio => match self.audio {
                Some(audio_id) => Ok(HotspotPayload::Audio { audio_id }),
                None => Err(CoreError::Validation(
                    "an audio hotspot needs an audio clip selected".to_string(),
                )),
            },
            DraftTab::Video => match self.video {
                Some(video_id) => Ok(HotspotPayload::Video { video_id }),
                None => Err(CoreError::Validation(
                    "a video hotspot needs a video selected".to_string(),
                )),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Per-window editor state mediating between user input and the two
/// working sets.
#[derive(Debug, Default)]
pub struct EditorSession {
    playback_position: f64,
    active_panel: Option<AnnotationKind>,
    draft: Option<HotspotDraft>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the player's current position, in fractional seconds.
    pub fn set_playback_position(&mut self, seconds: f64) {
        self.playback_position = seconds;
    }

    pub fn playback_position(&self) -> f64 {
        self.playback_position
    }

    /// The whole-second offset a new annotation would land on: the
    /// playback position truncated toward zero.
    pub fn current_timestamp(&self) -> i32 {
        self.playback_position.max(0.0).floor() as i32
    }

    /// Open one of the timeline insert panels; the panel's kind decides
    /// what "add at current position" creates.
    pub fn open_panel(&mut self, kind: AnnotationKind) {
        self.active_panel = Some(kind);
    }

    pub fn active_panel(&self) -> Option<AnnotationKind> {
        self.active_panel
    }

    pub fn close_panel(&mut self) {
        self.active_panel = None;
    }

    /// Add an annotation of the active panel's kind at the current
    /// playback position.
    pub fn annotate_at_playhead(&self, timeline: &mut TimelineEditor) -> Result<DbId, CoreError> {
        let Some(kind) = self.active_panel else {
            return Err(CoreError::Validation(
                "no insert panel is open; open the audio, picbook, or video panel first"
                    .to_string(),
            ));
        };
        let annotation = timeline.add_at_timestamp(kind, self.current_timestamp())?;
        Ok(annotation.id)
    }

    /// Open the edit panel for a hotspot, seeding the draft from its
    /// current payload. Any previously open draft is discarded,
    /// uncommitted edits included; edits survive only an explicit save.
    pub fn open_hotspot(&mut self, hotspot: &Hotspot) -> &mut HotspotDraft {
        self.draft.insert(HotspotDraft::from_hotspot(hotspot))
    }

    pub fn draft(&self) -> Option<&HotspotDraft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut HotspotDraft> {
        self.draft.as_mut()
    }

    /// Close the hotspot panel, dropping whatever was not saved.
    pub fn close_hotspot(&mut self) {
        self.draft = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
