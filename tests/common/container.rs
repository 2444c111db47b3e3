//! Storing hue-encoded frames in an ordinary image container (PNG).

use std::io::{BufWriter, Write};

use depth_hue::{ChannelOrder, ColorImage};

/// Write `color` as an 8-bit RGB PNG, reordering BGR frames first.
pub fn write_png<W: Write>(color: &ColorImage, out: W) {
    let rgb = color.to_order(ChannelOrder::Rgb);
    let mut encoder = png::Encoder::new(out, rgb.width() as u32, rgb.height() as u32);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder.write_header().expect("PNG header");
    writer
        .write_image_data(rgb.as_bytes())
        .expect("PNG image data");
    writer.finish().expect("PNG finish");
}

pub fn encode_png(color: &ColorImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    write_png(color, &mut bytes);
    bytes
}

/// Read an 8-bit RGB PNG back into a color image.
pub fn decode_png(bytes: &[u8]) -> ColorImage {
    let decoder = png::Decoder::new(bytes);
    let mut reader = decoder.read_info().expect("PNG info");
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("PNG frame");

    assert_eq!(info.color_type, png::ColorType::Rgb);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    buf.truncate(info.buffer_size());

    ColorImage::from_raw(
        info.width as usize,
        info.height as usize,
        ChannelOrder::Rgb,
        buf,
    )
    .expect("PNG frame matches its header")
}

pub fn save_png(color: &ColorImage, path: &std::path::Path) {
    let file = std::fs::File::create(path).expect("create PNG file");
    let mut out = BufWriter::new(file);
    write_png(color, &mut out);
    out.flush().expect("flush PNG file");
}

pub fn load_png(path: &std::path::Path) -> ColorImage {
    let bytes = std::fs::read(path).expect("read PNG file");
    decode_png(&bytes)
}
