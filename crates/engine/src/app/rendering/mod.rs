mod painter;
mod raster;

pub use painter::FramePainter;
pub(crate) use painter::write_pixel_rgba;
pub use raster::RasterImage;
