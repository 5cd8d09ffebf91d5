//! Screen resolutions supported by the Doom backend.
use anyhow::Result;
use gym_doom_core::{Env, GymDoomError};
use std::{fmt, str::FromStr};

/// Resolutions accepted by [`SetResolution`](crate::SetResolution), as `WIDTHxHEIGHT`.
pub const RESOLUTIONS: [&str; 36] = [
    "160x120", "200x125", "200x150", "256x144", "256x160", "256x192", "320x180", "320x200",
    "320x240", "320x256", "400x225", "400x250", "400x300", "512x288", "512x320", "512x384",
    "640x360", "640x400", "640x480", "800x450", "800x500", "800x600", "1024x576", "1024x640",
    "1024x768", "1280x720", "1280x800", "1280x960", "1280x1024", "1400x787", "1400x875",
    "1400x1050", "1600x900", "1600x1000", "1600x1200", "1920x1080",
];

macro_rules! screen_resolutions {
    ($(($variant:ident, $w:literal, $h:literal)),+ $(,)?) => {
        /// Screen resolution handles of the Doom backend.
        ///
        /// Each variant corresponds to the backend constant `RES_{WIDTH}X{HEIGHT}`.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum ScreenResolution {
            $(
                #[doc = concat!("`RES_", stringify!($w), "X", stringify!($h), "`")]
                $variant,
            )+
        }

        /// `(width, height)` to handle.
        const SCREEN_RESOLUTIONS: &[(u32, u32, ScreenResolution)] = &[
            $(($w, $h, ScreenResolution::$variant),)+
        ];
    };
}

screen_resolutions!(
    (Res160X120, 160, 120),
    (Res200X125, 200, 125),
    (Res200X150, 200, 150),
    (Res256X144, 256, 144),
    (Res256X160, 256, 160),
    (Res256X192, 256, 192),
    (Res320X180, 320, 180),
    (Res320X200, 320, 200),
    (Res320X240, 320, 240),
    (Res320X256, 320, 256),
    (Res400X225, 400, 225),
    (Res400X250, 400, 250),
    (Res400X300, 400, 300),
    (Res512X288, 512, 288),
    (Res512X320, 512, 320),
    (Res512X384, 512, 384),
    (Res640X360, 640, 360),
    (Res640X400, 640, 400),
    (Res640X480, 640, 480),
    (Res800X450, 800, 450),
    (Res800X500, 800, 500),
    (Res800X600, 800, 600),
    (Res1024X576, 1024, 576),
    (Res1024X640, 1024, 640),
    (Res1024X768, 1024, 768),
    (Res1280X720, 1280, 720),
    (Res1280X800, 1280, 800),
    (Res1280X960, 1280, 960),
    (Res1280X1024, 1280, 1024),
    (Res1400X787, 1400, 787),
    (Res1400X875, 1400, 875),
    (Res1400X1050, 1400, 1050),
    (Res1600X900, 1600, 900),
    (Res1600X1000, 1600, 1000),
    (Res1600X1200, 1600, 1200),
    (Res1920X1080, 1920, 1080),
);

impl ScreenResolution {
    /// Looks up the handle of a resolution.
    pub fn from_size(width: u32, height: u32) -> Option<Self> {
        SCREEN_RESOLUTIONS
            .iter()
            .find(|(w, h, _)| *w == width && *h == height)
            .map(|(_, _, res)| *res)
    }

    fn size(&self) -> (u32, u32) {
        SCREEN_RESOLUTIONS
            .iter()
            .find(|(_, _, res)| res == self)
            .map(|(w, h, _)| (*w, *h))
            .unwrap_or_default()
    }

    /// Screen width in pixels.
    pub fn width(&self) -> u32 {
        self.size().0
    }

    /// Screen height in pixels.
    pub fn height(&self) -> u32 {
        self.size().1
    }

    /// Name of the backend constant, e.g., `RES_640X480`.
    pub fn name(&self) -> String {
        let (w, h) = self.size();
        format!("RES_{}X{}", w, h)
    }
}

impl Default for ScreenResolution {
    fn default() -> Self {
        ScreenResolution::Res640X480
    }
}

/// A validated `WIDTHxHEIGHT` token taken from [`RESOLUTIONS`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolutionTarget {
    token: String,
    width: u32,
    height: u32,
}

impl ResolutionTarget {
    /// Validates and parses a target resolution.
    pub fn new(target: &str) -> Result<Self, GymDoomError> {
        let unsupported = || GymDoomError::UnsupportedResolution(target.to_string());
        if !RESOLUTIONS.contains(&target) {
            return Err(unsupported());
        }

        let lower = target.to_lowercase();
        let mut parts = lower.split('x');
        let mut next = || -> Result<u32, GymDoomError> {
            parts
                .next()
                .and_then(|p| p.parse().ok())
                .ok_or_else(unsupported)
        };
        let width = next()?;
        let height = next()?;

        Ok(Self {
            token: target.to_string(),
            width,
            height,
        })
    }

    /// Screen width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Screen height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The token, e.g., `640x480`.
    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl FromStr for ResolutionTarget {
    type Err = GymDoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for ResolutionTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

/// An environment backed by Doom whose screen resolution can be changed.
pub trait ResolutionConfigurable: Env {
    /// Checks that the backend library is available.
    ///
    /// Fails with [`GymDoomError::MissingBackendDependency`] otherwise.
    fn check_backend(&self) -> Result<()> {
        Ok(())
    }

    /// Returns the current screen resolution.
    fn screen_resolution(&self) -> ScreenResolution;

    /// Sets the screen resolution of the backend.
    fn set_screen_resolution(&mut self, resolution: ScreenResolution) -> Result<()>;

    /// Resolves the backend handle of a resolution.
    fn resolve_screen_resolution(&self, width: u32, height: u32) -> Option<ScreenResolution> {
        ScreenResolution::from_size(width, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_resolution_has_a_handle() {
        assert_eq!(SCREEN_RESOLUTIONS.len(), RESOLUTIONS.len());
        for r in RESOLUTIONS.iter() {
            let target: ResolutionTarget = r.parse().unwrap();
            let res = ScreenResolution::from_size(target.width(), target.height()).unwrap();
            assert_eq!(res.width(), target.width());
            assert_eq!(res.height(), target.height());
            assert_eq!(target.to_string(), *r);
        }
    }

    #[test]
    fn test_handle_name() {
        let res = ScreenResolution::from_size(1400, 787).unwrap();
        assert_eq!(res, ScreenResolution::Res1400X787);
        assert_eq!(res.name(), "RES_1400X787");
        assert_eq!(ScreenResolution::default().name(), "RES_640X480");
        assert!(ScreenResolution::from_size(999, 999).is_none());
    }

    #[test]
    fn test_unsupported_target() {
        for r in ["999x999", "640X480", "640x480 ", "", "x"].iter() {
            assert!(matches!(
                ResolutionTarget::new(r),
                Err(GymDoomError::UnsupportedResolution(_))
            ));
        }
    }
}
