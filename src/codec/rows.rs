//! Per-pixel encode/decode loops.
//!
//! Every pixel is independent, so frames are split into rows and, with the
//! `parallel` feature, spread over the rayon pool. Output is identical
//! either way.

use hue_codec::{decode_bytes, ChannelOrder, EncodeTable, RangeScaler};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[inline]
fn encode_row(scaler: &RangeScaler, table: &EncodeTable, src: &[u16], dst: &mut [u8]) {
    for (px, &raw) in dst.chunks_exact_mut(3).zip(src) {
        px.copy_from_slice(&table.bytes(scaler.forward(raw)));
    }
}

#[inline]
fn decode_row(scaler: &RangeScaler, order: ChannelOrder, src: &[u8], dst: &mut [u16]) {
    for (out, px) in dst.iter_mut().zip(src.chunks_exact(3)) {
        *out = scaler.inverse(decode_bytes([px[0], px[1], px[2]], order));
    }
}

/// Encode `src` (row-major, `width` samples per row) into `dst`
/// (`width * 3` bytes per row). Caller guarantees matching lengths.
pub(crate) fn encode_rows(
    scaler: &RangeScaler,
    table: &EncodeTable,
    width: usize,
    src: &[u16],
    dst: &mut [u8],
) {
    debug_assert_eq!(src.len() * 3, dst.len());

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(width * 3)
        .zip(src.par_chunks(width))
        .for_each(|(out, row)| encode_row(scaler, table, row, out));

    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(width * 3)
        .zip(src.chunks(width))
        .for_each(|(out, row)| encode_row(scaler, table, row, out));
}

/// Decode `src` (`width * 3` bytes per row, laid out in `order`) into `dst`.
pub(crate) fn decode_rows(
    scaler: &RangeScaler,
    order: ChannelOrder,
    width: usize,
    src: &[u8],
    dst: &mut [u16],
) {
    debug_assert_eq!(dst.len() * 3, src.len());

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(width)
        .zip(src.par_chunks(width * 3))
        .for_each(|(out, row)| decode_row(scaler, order, row, out));

    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(width)
        .zip(src.chunks(width * 3))
        .for_each(|(out, row)| decode_row(scaler, order, row, out));
}
