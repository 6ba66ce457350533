use crate::{
    foundation::core::{Fps, Resolution},
    foundation::error::{CamrigError, CamrigResult},
    subject::probe::SubjectKind,
};

/// Named output resolutions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPreset {
    /// 1280x720.
    Hd720,
    /// 1920x1080.
    #[default]
    Hd1080,
    /// 3840x2160.
    Uhd4k,
    /// 1080x1080.
    Square1080,
    /// Explicit dimensions.
    Custom {
        /// Width in pixels.
        width: u32,
        /// Height in pixels.
        height: u32,
    },
}

impl ResolutionPreset {
    /// Pixel dimensions for this preset.
    pub fn resolution(self) -> CamrigResult<Resolution> {
        match self {
            Self::Hd720 => Resolution::new(1280, 720),
            Self::Hd1080 => Resolution::new(1920, 1080),
            Self::Uhd4k => Resolution::new(3840, 2160),
            Self::Square1080 => Resolution::new(1080, 1080),
            Self::Custom { width, height } => Resolution::new(width, height),
        }
    }
}

/// Host render engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderEngine {
    /// Legacy real-time engine.
    Eevee,
    /// Next-generation real-time engine.
    EeveeNext,
}

/// Engine and scene-level toggles handed to the host.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderSettings {
    /// Render engine.
    pub engine: RenderEngine,
    /// Host resolution percentage (`1..=100`).
    pub resolution_percentage: u8,
    /// Motion blur; smooths the image scroll.
    pub motion_blur: bool,
    /// Screen-space ambient occlusion.
    pub ambient_occlusion: bool,
    /// Bloom on highlights.
    pub bloom: bool,
    /// Transparent film instead of the world background.
    pub film_transparent: bool,
    /// World background colour; `None` keeps the host default.
    pub world_color: Option<[f64; 3]>,
}

impl RenderSettings {
    /// Image rolls: fast engine with motion blur.
    pub fn image_roll() -> Self {
        Self {
            engine: RenderEngine::Eevee,
            resolution_percentage: 100,
            motion_blur: true,
            ambient_occlusion: false,
            bloom: false,
            film_transparent: false,
            world_color: None,
        }
    }

    /// Turntables: ambient occlusion, bloom and a dark grey world.
    pub fn turntable() -> Self {
        Self {
            engine: RenderEngine::EeveeNext,
            resolution_percentage: 100,
            motion_blur: false,
            ambient_occlusion: true,
            bloom: true,
            film_transparent: false,
            world_color: Some([0.05, 0.05, 0.05]),
        }
    }

    /// Defaults for a subject kind.
    pub fn for_subject(kind: SubjectKind) -> Self {
        match kind {
            SubjectKind::Image => Self::image_roll(),
            SubjectKind::Mesh => Self::turntable(),
        }
    }
}

/// Resolution, timing and engine settings for one shot.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RenderProfile {
    /// Output resolution before the percentage is applied.
    pub resolution: Resolution,
    /// Frame rate.
    pub fps: Fps,
    /// Animation length in frames.
    pub frame_count: u64,
    /// `frame_count / fps` in seconds.
    pub duration_secs: f64,
    /// Engine and scene toggles.
    pub settings: RenderSettings,
}

impl RenderProfile {
    /// Replace the engine settings.
    pub fn with_settings(mut self, settings: RenderSettings) -> CamrigResult<Self> {
        if !(1..=100).contains(&settings.resolution_percentage) {
            return Err(CamrigError::invalid_configuration(format!(
                "resolution percentage must be within 1..=100, got {}",
                settings.resolution_percentage
            )));
        }
        self.settings = settings;
        Ok(self)
    }

    /// Pixel dimensions the host actually writes.
    pub fn output_resolution(&self) -> Resolution {
        self.resolution.scaled(self.settings.resolution_percentage)
    }
}

/// Build a render profile with image-roll settings; see [`RenderProfile::with_settings`].
pub fn build(frame_count: u64, fps: u32, preset: ResolutionPreset) -> CamrigResult<RenderProfile> {
    if frame_count == 0 {
        return Err(CamrigError::invalid_configuration(
            "frame count must be > 0",
        ));
    }
    let fps = Fps::whole(fps)?;
    let resolution = preset.resolution()?;
    Ok(RenderProfile {
        resolution,
        fps,
        frame_count,
        duration_secs: fps.frames_to_secs(frame_count),
        settings: RenderSettings::image_roll(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/profile.rs"]
mod tests;
