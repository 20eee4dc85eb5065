/// Word / contour / bounding-box extraction from a glyph raster.
pub mod extract;
