use crate::types::{FetchPhase, Tab, TabPayload};

/// Per-tab fetch slot: at most one payload and one loading flag per tab.
///
/// `issued_seq` is a monotonically increasing request counter. A completion
/// carrying an older sequence number lost to a newer request and is
/// discarded, so the slot always reflects the latest issued request rather
/// than whichever response happened to resolve last.
#[derive(Debug, Clone, Default)]
pub struct TabSlot {
    pub loading: bool,
    pub payload: Option<TabPayload>,
    pub issued_seq: u64,
}

impl TabSlot {
    /// Mark a new fetch as started and return its sequence number.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.loading = true;
        self.issued_seq
    }

    /// Store a completed fetch. Returns false when the result is stale
    /// (a newer request has been issued since `seq`).
    pub fn complete_fetch(&mut self, seq: u64, payload: TabPayload) -> bool {
        if seq < self.issued_seq {
            return false;
        }
        self.payload = Some(payload);
        self.loading = false;
        true
    }

    /// Cache-until-refresh: a tab needs a fetch only when nothing is stored
    /// and nothing is in flight. Stored payloads, including errors, persist
    /// across tab switches until an explicit refresh.
    pub fn needs_fetch(&self) -> bool {
        self.payload.is_none() && !self.loading
    }

    pub fn phase(&self) -> FetchPhase {
        if self.loading {
            return FetchPhase::Loading;
        }
        match &self.payload {
            None => FetchPhase::Idle,
            Some(payload) if payload.is_error() => FetchPhase::Error,
            Some(_) => FetchPhase::Success,
        }
    }
}

/// One slot per tab, as named fields over the closed tab set.
#[derive(Debug, Clone, Default)]
pub struct TabSlots {
    pub blog: TabSlot,
    pub weather: TabSlot,
    pub tsunami: TabSlot,
    pub podcast: TabSlot,
    pub twitter: TabSlot,
}

impl TabSlots {
    pub fn get(&self, tab: Tab) -> &TabSlot {
        match tab {
            Tab::Blog => &self.blog,
            Tab::Weather => &self.weather,
            Tab::Tsunami => &self.tsunami,
            Tab::Podcast => &self.podcast,
            Tab::Twitter => &self.twitter,
        }
    }

    pub fn get_mut(&mut self, tab: Tab) -> &mut TabSlot {
        match tab {
            Tab::Blog => &mut self.blog,
            Tab::Weather => &mut self.weather,
            Tab::Tsunami => &mut self.tsunami,
            Tab::Podcast => &mut self.podcast,
            Tab::Twitter => &mut self.twitter,
        }
    }
}

/// On-demand podcast audio. Kept out of the podcast tab's payload so the
/// wholesale-replacement rule for slots stays intact.
#[derive(Debug, Clone, Default)]
pub struct AudioSlot {
    pub loading: bool,
    pub audio_url: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub active_tab: Tab,
    pub slots: TabSlots,
    pub audio: AudioSlot,
    /// Vertical scroll offset per tab, indexed by `Tab::index`.
    pub scroll: [u16; 5],
    /// Brief visual confirmation after a yank to the clipboard.
    pub yank_flash: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Blog,
            slots: TabSlots::default(),
            audio: AudioSlot::default(),
            scroll: [0; 5],
            yank_flash: false,
        }
    }
}

impl AppState {
    pub fn slot(&self, tab: Tab) -> &TabSlot {
        self.slots.get(tab)
    }

    pub fn slot_mut(&mut self, tab: Tab) -> &mut TabSlot {
        self.slots.get_mut(tab)
    }

    pub fn active_slot(&self) -> &TabSlot {
        self.slots.get(self.active_tab)
    }

    pub fn scroll_for(&self, tab: Tab) -> u16 {
        self.scroll[tab.index()]
    }

    pub fn scroll_by(&mut self, tab: Tab, delta: i32) {
        let current = self.scroll[tab.index()] as i32;
        self.scroll[tab.index()] = current.saturating_add(delta).max(0) as u16;
    }

    pub fn reset_scroll(&mut self, tab: Tab) {
        self.scroll[tab.index()] = 0;
    }
}
