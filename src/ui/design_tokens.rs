// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants, following the W3C Design Tokens layout.

## Organization

- **Palette**: Base colors
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_gallery::ui::design_tokens::{palette, spacing, sizing};

let padding = spacing::MD; // 16px
let thumbnail = sizing::THUMBNAIL_HEIGHT;
assert!(thumbnail > padding);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    // Semantic colors
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Indicator sizes
    pub const ICON_LG: f32 = 32.0;
    pub const ICON_XL: f32 = 48.0;

    /// Height of the cropped image box in a gallery row.
    pub const THUMBNAIL_HEIGHT: f32 = 200.0;

    /// Horizontal padding around the gallery list.
    pub const LIST_GUTTER: f32 = 20.0;

    /// Width cap for the gallery column on wide windows.
    pub const LIST_MAX_WIDTH: f32 = 720.0;

    /// Width cap for the error panel.
    pub const PANEL_MAX_WIDTH: f32 = 500.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale following Material Design 3 type scale principles.

    /// Medium title - Error panel heading
    pub const TITLE_MD: f32 = 20.0;

    /// Small title - Header bar
    pub const TITLE_SM: f32 = 18.0;

    /// Large body - Row titles
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Most UI text
    pub const BODY: f32 = 14.0;

    /// Caption - Photographer, location, dates
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::THUMBNAIL_HEIGHT > sizing::ICON_XL);
    assert!(sizing::LIST_MAX_WIDTH > sizing::PANEL_MAX_WIDTH);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY > typography::CAPTION);
};
