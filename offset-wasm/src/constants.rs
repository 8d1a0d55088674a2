/// Element ids the page must provide.
pub const BIT_INPUT: &str = "bit";
pub const BUSH_INPUT: &str = "bush";
pub const TARGET_INPUT: &str = "target";
pub const LANG_TOGGLE: &str = "lang-toggle";

/// Output regions. Missing ones are skipped.
pub const RESULT: &str = "result";
pub const FORMULA: &str = "formula-display";
pub const TEMPLATE_RESULT: &str = "template-result";
pub const TEMPLATE_FORMULA: &str = "template-formula";
pub const SVG_BUSH: &str = "svgBush";
pub const SVG_BIT: &str = "svgBit";
pub const DIM_GROUP: &str = "dimGroup";
pub const DIM_LINE: &str = "dimLine";
pub const DIM_TICK_1: &str = "dimTick1";
pub const DIM_TICK_2: &str = "dimTick2";
pub const DIM_TEXT: &str = "dimText";
pub const EXPORT_PNG: &str = "exportPng";

/// Attribute carrying a translatable label id.
pub const I18N_ATTR: &str = "data-i18n";

/// Export resolution (px per schematic unit).
pub const EXPORT_SCALE: f64 = 4.0;
pub const EXPORT_FILENAME: &str = "offset_schematic.png";
