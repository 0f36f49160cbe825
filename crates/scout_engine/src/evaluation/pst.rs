//! Piece-square table decoding
//!
//! The tables are the PeSTO midgame/endgame piece-square tables with the
//! piece values folded in, range-compressed to one signed byte per entry.
//! Each packed word holds the twelve entries of one square, least significant
//! byte first, in the order
//!
//! ```text
//! pawn mg, pawn eg, knight mg, knight eg, ..., king mg, king eg
//! ```
//!
//! Only the low 96 bits of a word carry data; the top 32 bits are reserved and
//! always zero. Squares run a8, b8, ..., h1 (the board as seen by White,
//! read top to bottom), which is Black's a1-first numbering.
//!
//! An entry decodes to `base + 1475 * delta / 1000`, where `base` is the
//! material value of the piece in that phase.

/// Number of decoded entries: 64 squares x 6 piece kinds x 2 phases.
pub const TABLE_LEN: usize = 64 * 6 * 2;

/// Bytes of payload per packed word.
const BYTES_PER_WORD: usize = 12;

/// Material value per (piece kind, phase), in table order.
const BASE_VALUES: [i32; BYTES_PER_WORD] = [
    82, 94, // pawn
    337, 281, // knight
    365, 297, // bishop
    477, 512, // rook
    1025, 936, // queen
    0, 0, // king
];

/// Scale applied to a delta, in thousandths.
const DELTA_SCALE_PERMILLE: i32 = 1475;

#[rustfmt::skip]
const PACKED: [u128; 64] = [
    0xced4faed0916f7ecd98f0000, 0xe8100f00071cf203e6c40000,
    0xf40b0f140c16f9c8f7e90000, 0xf4f612080a23fbe7eddf0000,
    0xf9da1228082bfbefeb290000, 0xf6e90d1e0806fae4eebe0000,
    0xfd01071d0515f405d5f60000, 0xf4090e1f031df0fbbdb70000,
    0xf814f4f00712fbeeefcf7942, 0x0cff0ee60916fd0bfbe4755b,
    0x09f216fd092705f4ef316b29, 0x0cfb1c01072af8f7ff185b40,
    0x0cfb27f5fe36fe14fa10642e, 0x1afd1127022df728ef2a5955,
    0x10e614130512fd0cf0057017, 0xf9ec0025021ef7e0ddf47ff9,
    0xf9faf2f705fd01f5f0e040fc, 0x0c1004f4050dfb19f2294405,
    0x100106050512001d07193a12, 0x0af521050318ff1b062c2d15,
    0x0ef22014030cff18ff39262c, 0x1f041826fe1f0422fa572426,
    0x1e0f0d20fd290019f3313811, 0xf7f10627fe0b03ffe41e39f2,
    0xfbf402ee03f0fefdf4fa16f7, 0x0ff20fee02f90603020c1009,
    0x10f810f50905080d0f0d0904, 0x12ee1ff5011206220f24030e,
    0x12ec27ff011009190f19ff10, 0x16ef1b0c01180719072f0308,
    0x12f727fffffb0205050c0c0c, 0xfee8180101f201fff40f0cf0,
    0xf4dff4fa02e8fcfcf4f709ee, 0xfdff13ee03ee0209fc0306ff,
    0x0eee0dfa05f809090b0bfefd, 0x10e620f903ff0d121109fb08,
    0x12e115fffd0605170b13fb0c, 0x10e217fdfcfb07080c0dfb04,
    0x06ea1a02fb04fe07030e0207, 0xf9dd10fef9f0fa03f4fbffef,
    0xf3f7f5f7fde1f800f0f003ee, 0xfef7ee0100effe0afefa05fd,
    0x07f10af9fdf5050aff08fcfd, 0x0ee104fffff4070a0a0701f9,
    0x10e206fdfb020909070d0002, 0x0bec0c01f8000212fe0cfd02,
    0x05f60709fbfdfb0cf211ff16, 0xfaee0303f5eaf607f1f5fbf8,
    0xee01f1e8fce2f703e4ec09e8, 0xf905f0fbfcf5f40af2dc05ff,
    0x03fbec0700f2fb0bf9f805f2, 0x09d5f50101faff00fdfe07f0,
    0x09e3f505faff0305ffff09f6, 0x03f5f00afa07fa0ef20c0010,
    0xfd06e8fef9fcf616f0f7011a, 0xf405ea01fed0ee01e2f3fbf1,
    0xdcf6eafffaf3f0eaecb90000, 0xe918edf401f7fafeddf20000,
    0xf208f1fa0201f0f7f0d90000, 0xf9dbe307ff0cfdf2f6ea0000,
    0xed05fdf6fd0bfaf7f1f40000, 0xf7edeaeff705f5f8f4ed0000,
    0xf010f2eb03e7fde6def30000, 0xe309e4def2eef4f2d5f00000,
];

/// Decoded piece-square table, indexed by `square * 12 + kind * 2 + phase`.
pub type PieceSquareTable = [i32; TABLE_LEN];

/// Expands the packed words into the flat lookup table.
pub fn decode() -> Box<PieceSquareTable> {
    let mut table = Box::new([0i32; TABLE_LEN]);
    let bytes = PACKED
        .iter()
        .flat_map(|word| word.to_le_bytes().into_iter().take(BYTES_PER_WORD));

    for (i, byte) in bytes.enumerate() {
        let delta = byte as i8 as i32;
        table[i] = BASE_VALUES[i % BYTES_PER_WORD] + DELTA_SCALE_PERMILLE * delta / 1000;
    }

    table
}
