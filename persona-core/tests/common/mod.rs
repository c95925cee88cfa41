#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use persona_core::{
    AutoplayTimer, ModeSurface, PersonaSite, PreferenceStore, PresentationMode, SiteConfig,
    SlideRenderer,
};

#[derive(Debug, thiserror::Error)]
#[error("storage offline")]
pub struct StorageOffline;

#[derive(Default)]
pub struct MemoryStore {
    pub values: HashMap<String, String>,
    pub writes: Vec<String>,
    pub offline: bool,
}

impl MemoryStore {
    pub fn with_saved(value: &str) -> Self {
        let mut store = Self::default();
        store.values.insert("mode".to_string(), value.to_string());
        store
    }
}

impl PreferenceStore for MemoryStore {
    type Error = StorageOffline;

    fn load(&self, key: &str) -> Result<Option<String>, Self::Error> {
        if self.offline {
            return Err(StorageOffline);
        }
        Ok(self.values.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), Self::Error> {
        if self.offline {
            return Err(StorageOffline);
        }
        self.values.insert(key.to_string(), value.to_string());
        self.writes.push(value.to_string());
        Ok(())
    }
}

/// Records what the page root would look like.
#[derive(Default)]
pub struct RecordingSurface {
    pub dj_flag: bool,
    pub voice_label_active: bool,
    pub dj_label_active: bool,
    pub title: Option<String>,
    pub presentations: usize,
}

impl ModeSurface for RecordingSurface {
    fn present(&mut self, mode: PresentationMode, title: Option<&str>) {
        self.dj_flag = mode.is_dj();
        self.voice_label_active = !mode.is_dj();
        self.dj_label_active = mode.is_dj();
        if let Some(title) = title {
            self.title = Some(title.to_string());
        }
        self.presentations += 1;
    }
}

/// Image opacities and indicator classes, positionally paired.
pub struct Slides {
    pub opacity: Vec<&'static str>,
    pub indicator_active: Vec<bool>,
}

impl Slides {
    pub fn new(count: usize) -> Self {
        Self {
            opacity: vec!["1"; count],
            indicator_active: vec![false; count],
        }
    }

    pub fn visible(&self) -> Vec<usize> {
        (0..self.opacity.len())
            .filter(|i| self.opacity[*i] == "1")
            .collect()
    }

    pub fn active_indicators(&self) -> Vec<usize> {
        (0..self.indicator_active.len())
            .filter(|i| self.indicator_active[*i])
            .collect()
    }
}

impl SlideRenderer for Slides {
    fn image_count(&self) -> usize {
        self.opacity.len()
    }

    fn render(&mut self, active: usize) {
        for (i, opacity) in self.opacity.iter_mut().enumerate() {
            *opacity = if i == active { "1" } else { "0" };
        }
        for (i, dot) in self.indicator_active.iter_mut().enumerate() {
            *dot = i == active;
        }
    }
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: u32,
    /// (id, period, next due time)
    intervals: Vec<(u32, u64, u64)>,
}

/// Manual clock that drives repeating timers deterministically.
#[derive(Clone, Default)]
pub struct ManualClock {
    state: Rc<RefCell<ClockState>>,
}

impl ManualClock {
    pub fn timer(&self) -> ClockTimer {
        ClockTimer {
            clock: self.clone(),
            handle: None,
        }
    }

    pub fn active_intervals(&self) -> usize {
        self.state.borrow().intervals.len()
    }

    /// Move time forward by `ms`, returning how many interval triggers fired.
    pub fn elapse(&self, ms: u64) -> usize {
        let mut state = self.state.borrow_mut();
        let target = state.now_ms + ms;
        let mut fired = 0;
        for (_, period, due) in &mut state.intervals {
            while *due <= target {
                fired += 1;
                *due += *period;
            }
        }
        state.now_ms = target;
        fired
    }
}

pub struct ClockTimer {
    clock: ManualClock,
    handle: Option<u32>,
}

impl AutoplayTimer for ClockTimer {
    fn arm(&mut self, period_ms: u32) {
        let mut state = self.clock.state.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        let due = state.now_ms + u64::from(period_ms);
        state.intervals.push((id, u64::from(period_ms), due));
        self.handle = Some(id);
    }

    fn cancel(&mut self) {
        if let Some(id) = self.handle.take() {
            self.clock
                .state
                .borrow_mut()
                .intervals
                .retain(|(other, _, _)| *other != id);
        }
    }
}

pub type TestSite = PersonaSite<RecordingSurface, MemoryStore, Slides, ClockTimer>;

pub fn site_with(
    config: SiteConfig,
    store: MemoryStore,
    images: usize,
) -> (TestSite, ManualClock) {
    let clock = ManualClock::default();
    let site = PersonaSite::new(
        config,
        RecordingSurface::default(),
        store,
        Slides::new(images),
        clock.timer(),
    );
    (site, clock)
}

/// Run the clock forward, delivering every trigger to the site.
pub fn run_for(site: &mut TestSite, clock: &ManualClock, ms: u64) -> usize {
    let fired = clock.elapse(ms);
    for _ in 0..fired {
        site.tick();
    }
    fired
}
