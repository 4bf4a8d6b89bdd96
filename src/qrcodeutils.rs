use anyhow::{anyhow, Result};
use resvg::render;
use tiny_skia::Pixmap;
use usvg::{Options, Tree};

/// Rasterizes an SVG document (the wallet QR code) into PNG bytes that
/// Telegram accepts as a photo.
pub fn convert_svg_to_png(svg_data: &[u8]) -> Result<Vec<u8>> {
    let tree = Tree::from_data(svg_data, &Options::default())
        .map_err(|e| anyhow!("Error parsing SVG: {}", e))?;

    let size = tree.size();
    let (width, height) = (size.width().ceil() as u32, size.height().ceil() as u32);

    let mut pixmap = Pixmap::new(width, height)
        .ok_or_else(|| anyhow!("Invalid QR image size {}x{}", width, height))?;
    render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    let mut png_data = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut png_data, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(pixmap.data())?;
    }

    Ok(png_data)
}
