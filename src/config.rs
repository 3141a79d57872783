//! Display configuration types and builder

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

use crate::command_list::{
    INIT_R_GREEN, INIT_R_GREEN_144, INIT_R_MINI_160X80, INIT_R_RED,
};

/// Panel sub-types sold with ST7735R controllers
///
/// Each variant fixes the visible geometry and selects one of the built-in
/// address-range command lists. The names follow the colored tab on the
/// protective film of the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanelVariant {
    /// 1.8" 128x160, green tab (memory offset 2 columns, 1 row)
    GreenTab,
    /// 1.8" 128x160, red tab
    RedTab,
    /// 1.8" 128x160, black tab (RGB order flipped via MADCTL)
    BlackTab,
    /// 1.44" 128x128, green tab
    GreenTab144,
    /// 0.96" 80x160 mini panel
    MiniTab160x80,
    /// 1.44" 128x128 panel on the Hallowing board
    Hallowing,
}

impl PanelVariant {
    /// Visible geometry and memory offset of this panel
    pub fn geometry(self) -> Geometry {
        match self {
            Self::GreenTab => Geometry::fixed(128, 160, 2, 1),
            Self::RedTab | Self::BlackTab => Geometry::fixed(128, 160, 0, 0),
            Self::GreenTab144 | Self::Hallowing => Geometry::fixed(128, 128, 2, 3),
            Self::MiniTab160x80 => Geometry::fixed(80, 160, 24, 0),
        }
    }

    /// Variant-specific address-range command list, run between the common parts
    pub fn address_list(self) -> &'static [u8] {
        match self {
            Self::GreenTab => INIT_R_GREEN,
            Self::RedTab | Self::BlackTab => INIT_R_RED,
            Self::GreenTab144 | Self::Hallowing => INIT_R_GREEN_144,
            Self::MiniTab160x80 => INIT_R_MINI_160X80,
        }
    }
}

/// Visible panel size and its offset into controller memory
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    /// Visible width in pixels
    pub width: u16,
    /// Visible height in pixels
    pub height: u16,
    /// First controller column wired to the panel
    pub col_offset: u16,
    /// First controller row wired to the panel
    pub row_offset: u16,
}

impl Geometry {
    /// Create a new geometry with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidGeometry` if:
    /// - width or height is 0
    /// - width + col_offset > MAX_COLUMNS
    /// - height + row_offset > MAX_ROWS
    pub fn new(
        width: u16,
        height: u16,
        col_offset: u16,
        row_offset: u16,
    ) -> Result<Self, BuilderError> {
        let fits = width > 0
            && height > 0
            && u32::from(width) + u32::from(col_offset) <= u32::from(MAX_COLUMNS)
            && u32::from(height) + u32::from(row_offset) <= u32::from(MAX_ROWS);
        if !fits {
            return Err(BuilderError::InvalidGeometry {
                width,
                height,
                col_offset,
                row_offset,
            });
        }
        Ok(Self::fixed(width, height, col_offset, row_offset))
    }

    const fn fixed(width: u16, height: u16, col_offset: u16, row_offset: u16) -> Self {
        Self {
            width,
            height,
            col_offset,
            row_offset,
        }
    }

    /// Number of pixels on the panel
    pub fn pixel_count(&self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Display configuration
///
/// Use `Builder` to create a Config.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Panel variant, selects the init command lists
    pub variant: PanelVariant,
    /// Visible geometry (the variant's own unless overridden)
    pub geometry: Geometry,
    /// Whether text wraps at the right edge initially
    pub text_wrap: bool,
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```
/// use st7735::{Builder, PanelVariant};
///
/// let config = match Builder::new().variant(PanelVariant::BlackTab).build() {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// assert_eq!(config.geometry.width, 128);
/// assert_eq!(config.geometry.height, 160);
/// ```
#[must_use]
pub struct Builder {
    /// Panel variant (required)
    variant: Option<PanelVariant>,
    /// Geometry override for panels with non-standard wiring
    geometry: Option<Geometry>,
    /// Initial text wrap flag
    text_wrap: bool,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            variant: None,
            geometry: None,
            text_wrap: true,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set panel variant (required)
    pub fn variant(mut self, variant: PanelVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Override the variant's geometry
    ///
    /// The variant's command lists are still used for initialization.
    pub fn geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Set whether text wraps at the right edge
    pub fn text_wrap(mut self, wrap: bool) -> Self {
        self.text_wrap = wrap;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingVariant` if the variant was not set
    pub fn build(self) -> Result<Config, BuilderError> {
        let variant = self.variant.ok_or(BuilderError::MissingVariant)?;
        Ok(Config {
            variant,
            geometry: self.geometry.unwrap_or_else(|| variant.geometry()),
            text_wrap: self.text_wrap,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_variant() {
        assert_eq!(Builder::new().build(), Err(BuilderError::MissingVariant));
    }

    #[test]
    fn test_variant_geometry_is_default() {
        let config = Builder::new()
            .variant(PanelVariant::GreenTab)
            .build()
            .unwrap();
        assert_eq!(config.geometry, Geometry::new(128, 160, 2, 1).unwrap());
        assert!(config.text_wrap);
    }

    #[test]
    fn test_geometry_override() {
        let custom = Geometry::new(4, 2, 0, 0).unwrap();
        let config = Builder::new()
            .variant(PanelVariant::RedTab)
            .geometry(custom)
            .text_wrap(false)
            .build()
            .unwrap();
        assert_eq!(config.geometry, custom);
        assert!(!config.text_wrap);
    }

    #[test]
    fn test_all_variants_fit_controller_memory() {
        for variant in [
            PanelVariant::GreenTab,
            PanelVariant::RedTab,
            PanelVariant::BlackTab,
            PanelVariant::GreenTab144,
            PanelVariant::MiniTab160x80,
            PanelVariant::Hallowing,
        ] {
            let g = variant.geometry();
            assert_eq!(
                Geometry::new(g.width, g.height, g.col_offset, g.row_offset),
                Ok(g)
            );
        }
    }

    #[test]
    fn test_geometry_rejects_overflowing_offsets() {
        assert!(Geometry::new(128, 160, 5, 0).is_err());
        assert!(Geometry::new(128, 160, 0, 3).is_err());
        assert!(Geometry::new(0, 10, 0, 0).is_err());
        assert!(Geometry::new(132, 162, 0, 0).is_ok());
    }
}
