use std::rc::Rc;

use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Playback {
    Playing,
    Paused,
}

impl Playback {
    pub fn toggled(self) -> Self {
        match self {
            Playback::Playing => Playback::Paused,
            Playback::Paused => Playback::Playing,
        }
    }

    /// Icon of the action the button performs next.
    pub fn icon(self) -> &'static str {
        match self {
            Playback::Playing => "fas fa-pause",
            Playback::Paused => "fas fa-play",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Volume {
    Muted,
    Half,
    Full,
}

impl Volume {
    pub fn next(self) -> Self {
        match self {
            Volume::Muted => Volume::Half,
            Volume::Half => Volume::Full,
            Volume::Full => Volume::Muted,
        }
    }

    pub fn is_muted(self) -> bool {
        self == Volume::Muted
    }

    pub fn amount(self) -> f64 {
        match self {
            Volume::Muted => 0.0,
            Volume::Half => 0.5,
            Volume::Full => 1.0,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Volume::Muted => "fas fa-volume-xmark",
            Volume::Half => "fas fa-volume-low",
            Volume::Full => "fas fa-volume-high",
        }
    }
}

/// Overlay state of the hero video. Browsers only autoplay muted video,
/// hence the initial `(Playing, Muted)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoState {
    pub playback: Playback,
    pub volume: Volume,
}

impl Default for VideoState {
    fn default() -> Self {
        Self {
            playback: Playback::Playing,
            volume: Volume::Muted,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoAction {
    TogglePlayback,
    CycleVolume,
}

impl VideoState {
    pub fn next(self, action: VideoAction) -> Self {
        match action {
            VideoAction::TogglePlayback => Self {
                playback: self.playback.toggled(),
                ..self
            },
            VideoAction::CycleVolume => Self {
                volume: self.volume.next(),
                ..self
            },
        }
    }
}

impl Reducible for VideoState {
    type Action = VideoAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.next(action))
    }
}

/// Only a click landing on the video itself toggles playback; clicks that
/// bubble up from the overlay buttons carry a different target.
pub fn is_surface_click<T: PartialEq>(target: Option<&T>, current_target: Option<&T>) -> bool {
    match (target, current_target) {
        (Some(target), Some(current)) => target == current,
        _ => false,
    }
}

/// The media element the overlay drives.
pub trait MediaSink {
    fn play(&self);
    fn pause(&self);
    fn set_muted(&self, muted: bool);
    fn set_volume(&self, amount: f64);
}

pub fn sync_playback<M: MediaSink>(sink: &M, playback: Playback) {
    match playback {
        Playback::Playing => sink.play(),
        Playback::Paused => sink.pause(),
    }
}

pub fn sync_volume<M: MediaSink>(sink: &M, volume: Volume) {
    sink.set_muted(volume.is_muted());
    sink.set_volume(volume.amount());
}

/// Pushes `next` onto the element, touching only what changed since the
/// last sync. Volume goes first so the initial `play()` runs muted.
pub fn sync<M: MediaSink>(sink: &M, previous: Option<VideoState>, next: VideoState) {
    if previous.map_or(true, |p| p.volume != next.volume) {
        sync_volume(sink, next.volume);
    }
    if previous.map_or(true, |p| p.playback != next.playback) {
        sync_playback(sink, next.playback);
    }
}
