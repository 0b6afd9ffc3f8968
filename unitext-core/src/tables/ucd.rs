// @generated by tools/gen_ucd_tables.pl. Do not edit.

/// Unicode character database version the tables were generated from
pub const UNICODE_VERSION: &str = "15.1";

// Each table is a sorted list of (first codepoint, mask) runs covering
// U+0000..=U+10FFFF; a run extends to the start of the next one.

/// Grapheme_Cluster_Break plus Extended_Pictographic and Indic_Conjunct_Break
pub(crate) static GRAPHEME_RANGES: &[(u32, u32)] = &[
    (0x0000, 0x00004), (0x000A, 0x00002), (0x000B, 0x00004), (0x000D, 0x00001), (0x000E, 0x00004), (0x0020, 0x20000),
    (0x007F, 0x00004), (0x00A0, 0x20000), (0x00A9, 0x02000), (0x00AA, 0x20000), (0x00AD, 0x00004), (0x00AE, 0x02000),
    (0x00AF, 0x20000), (0x0300, 0x10008), (0x034F, 0x00008), (0x0350, 0x10008), (0x0370, 0x20000), (0x0483, 0x10008),
    (0x0488, 0x00008), (0x048A, 0x20000), (0x0591, 0x10008), (0x05BE, 0x20000), (0x05BF, 0x10008), (0x05C0, 0x20000),
    (0x05C1, 0x10008), (0x05C3, 0x20000), (0x05C4, 0x10008), (0x05C6, 0x20000), (0x05C7, 0x10008), (0x05C8, 0x20000),
    (0x0600, 0x00040), (0x0606, 0x20000), (0x0610, 0x10008), (0x061B, 0x20000), (0x061C, 0x00004), (0x061D, 0x20000),
    (0x064B, 0x10008), (0x0660, 0x20000), (0x0670, 0x10008), (0x0671, 0x20000), (0x06D6, 0x10008), (0x06DD, 0x00040),
    (0x06DE, 0x20000), (0x06DF, 0x10008), (0x06E5, 0x20000), (0x06E7, 0x10008), (0x06E9, 0x20000), (0x06EA, 0x10008),
    (0x06EE, 0x20000), (0x070F, 0x00040), (0x0710, 0x20000), (0x0711, 0x10008), (0x0712, 0x20000), (0x0730, 0x10008),
    (0x074B, 0x20000), (0x07A6, 0x00008), (0x07B1, 0x20000), (0x07EB, 0x10008), (0x07F4, 0x20000), (0x07FD, 0x10008),
    (0x07FE, 0x20000), (0x0816, 0x10008), (0x081A, 0x20000), (0x081B, 0x10008), (0x0824, 0x20000), (0x0825, 0x10008),
    (0x0828, 0x20000), (0x0829, 0x10008), (0x082E, 0x20000), (0x0859, 0x10008), (0x085C, 0x20000), (0x0890, 0x00040),
    (0x0892, 0x20000), (0x0898, 0x10008), (0x08A0, 0x20000), (0x08CA, 0x10008), (0x08E2, 0x00040), (0x08E3, 0x10008),
    (0x0900, 0x00008), (0x0903, 0x00080), (0x0904, 0x20000), (0x0915, 0x08000), (0x093A, 0x00008), (0x093B, 0x00080),
    (0x093C, 0x10008), (0x093D, 0x20000), (0x093E, 0x00080), (0x0941, 0x00008), (0x0949, 0x00080), (0x094D, 0x04008),
    (0x094E, 0x00080), (0x0950, 0x20000), (0x0951, 0x10008), (0x0955, 0x00008), (0x0958, 0x08000), (0x0960, 0x20000),
    (0x0962, 0x00008), (0x0964, 0x20000), (0x0978, 0x08000), (0x0980, 0x20000), (0x0981, 0x00008), (0x0982, 0x00080),
    (0x0984, 0x20000), (0x0995, 0x08000), (0x09A9, 0x20000), (0x09AA, 0x08000), (0x09B1, 0x20000), (0x09B2, 0x08000),
    (0x09B3, 0x20000), (0x09B6, 0x08000), (0x09BA, 0x20000), (0x09BC, 0x10008), (0x09BD, 0x20000), (0x09BE, 0x00008),
    (0x09BF, 0x00080), (0x09C1, 0x00008), (0x09C5, 0x20000), (0x09C7, 0x00080), (0x09C9, 0x20000), (0x09CB, 0x00080),
    (0x09CD, 0x04008), (0x09CE, 0x20000), (0x09D7, 0x00008), (0x09D8, 0x20000), (0x09DC, 0x08000), (0x09DE, 0x20000),
    (0x09DF, 0x08000), (0x09E0, 0x20000), (0x09E2, 0x00008), (0x09E4, 0x20000), (0x09F0, 0x08000), (0x09F2, 0x20000),
    (0x09FE, 0x10008), (0x09FF, 0x20000), (0x0A01, 0x00008), (0x0A03, 0x00080), (0x0A04, 0x20000), (0x0A3C, 0x10008),
    (0x0A3D, 0x20000), (0x0A3E, 0x00080), (0x0A41, 0x00008), (0x0A43, 0x20000), (0x0A47, 0x00008), (0x0A49, 0x20000),
    (0x0A4B, 0x00008), (0x0A4D, 0x10008), (0x0A4E, 0x20000), (0x0A51, 0x00008), (0x0A52, 0x20000), (0x0A70, 0x00008),
    (0x0A72, 0x20000), (0x0A75, 0x00008), (0x0A76, 0x20000), (0x0A81, 0x00008), (0x0A83, 0x00080), (0x0A84, 0x20000),
    (0x0A95, 0x08000), (0x0AA9, 0x20000), (0x0AAA, 0x08000), (0x0AB1, 0x20000), (0x0AB2, 0x08000), (0x0AB4, 0x20000),
    (0x0AB5, 0x08000), (0x0ABA, 0x20000), (0x0ABC, 0x10008), (0x0ABD, 0x20000), (0x0ABE, 0x00080), (0x0AC1, 0x00008),
    (0x0AC6, 0x20000), (0x0AC7, 0x00008), (0x0AC9, 0x00080), (0x0ACA, 0x20000), (0x0ACB, 0x00080), (0x0ACD, 0x04008),
    (0x0ACE, 0x20000), (0x0AE2, 0x00008), (0x0AE4, 0x20000), (0x0AF9, 0x08000), (0x0AFA, 0x00008), (0x0B00, 0x20000),
    (0x0B01, 0x00008), (0x0B02, 0x00080), (0x0B04, 0x20000), (0x0B15, 0x08000), (0x0B29, 0x20000), (0x0B2A, 0x08000),
    (0x0B31, 0x20000), (0x0B32, 0x08000), (0x0B34, 0x20000), (0x0B35, 0x08000), (0x0B3A, 0x20000), (0x0B3C, 0x10008),
    (0x0B3D, 0x20000), (0x0B3E, 0x00008), (0x0B40, 0x00080), (0x0B41, 0x00008), (0x0B45, 0x20000), (0x0B47, 0x00080),
    (0x0B49, 0x20000), (0x0B4B, 0x00080), (0x0B4D, 0x04008), (0x0B4E, 0x20000), (0x0B55, 0x00008), (0x0B58, 0x20000),
    (0x0B5C, 0x08000), (0x0B5E, 0x20000), (0x0B5F, 0x08000), (0x0B60, 0x20000), (0x0B62, 0x00008), (0x0B64, 0x20000),
    (0x0B71, 0x08000), (0x0B72, 0x20000), (0x0B82, 0x00008), (0x0B83, 0x20000), (0x0BBE, 0x00008), (0x0BBF, 0x00080),
    (0x0BC0, 0x00008), (0x0BC1, 0x00080), (0x0BC3, 0x20000), (0x0BC6, 0x00080), (0x0BC9, 0x20000), (0x0BCA, 0x00080),
    (0x0BCD, 0x10008), (0x0BCE, 0x20000), (0x0BD7, 0x00008), (0x0BD8, 0x20000), (0x0C00, 0x00008), (0x0C01, 0x00080),
    (0x0C04, 0x00008), (0x0C05, 0x20000), (0x0C15, 0x08000), (0x0C29, 0x20000), (0x0C2A, 0x08000), (0x0C3A, 0x20000),
    (0x0C3C, 0x10008), (0x0C3D, 0x20000), (0x0C3E, 0x00008), (0x0C41, 0x00080), (0x0C45, 0x20000), (0x0C46, 0x00008),
    (0x0C49, 0x20000), (0x0C4A, 0x00008), (0x0C4D, 0x04008), (0x0C4E, 0x20000), (0x0C55, 0x10008), (0x0C57, 0x20000),
    (0x0C58, 0x08000), (0x0C5B, 0x20000), (0x0C62, 0x00008), (0x0C64, 0x20000), (0x0C81, 0x00008), (0x0C82, 0x00080),
    (0x0C84, 0x20000), (0x0CBC, 0x10008), (0x0CBD, 0x20000), (0x0CBE, 0x00080), (0x0CBF, 0x00008), (0x0CC0, 0x00080),
    (0x0CC2, 0x00008), (0x0CC3, 0x00080), (0x0CC5, 0x20000), (0x0CC6, 0x00008), (0x0CC7, 0x00080), (0x0CC9, 0x20000),
    (0x0CCA, 0x00080), (0x0CCC, 0x00008), (0x0CCD, 0x10008), (0x0CCE, 0x20000), (0x0CD5, 0x00008), (0x0CD7, 0x20000),
    (0x0CE2, 0x00008), (0x0CE4, 0x20000), (0x0CF3, 0x00080), (0x0CF4, 0x20000), (0x0D00, 0x00008), (0x0D02, 0x00080),
    (0x0D04, 0x20000), (0x0D15, 0x08000), (0x0D3B, 0x10008), (0x0D3D, 0x20000), (0x0D3E, 0x00008), (0x0D3F, 0x00080),
    (0x0D41, 0x00008), (0x0D45, 0x20000), (0x0D46, 0x00080), (0x0D49, 0x20000), (0x0D4A, 0x00080), (0x0D4D, 0x04008),
    (0x0D4E, 0x00040), (0x0D4F, 0x20000), (0x0D57, 0x00008), (0x0D58, 0x20000), (0x0D62, 0x00008), (0x0D64, 0x20000),
    (0x0D81, 0x00008), (0x0D82, 0x00080), (0x0D84, 0x20000), (0x0DCA, 0x10008), (0x0DCB, 0x20000), (0x0DCF, 0x00008),
    (0x0DD0, 0x00080), (0x0DD2, 0x00008), (0x0DD5, 0x20000), (0x0DD6, 0x00008), (0x0DD7, 0x20000), (0x0DD8, 0x00080),
    (0x0DDF, 0x00008), (0x0DE0, 0x20000), (0x0DF2, 0x00080), (0x0DF4, 0x20000), (0x0E31, 0x00008), (0x0E32, 0x20000),
    (0x0E33, 0x00080), (0x0E34, 0x00008), (0x0E38, 0x10008), (0x0E3B, 0x20000), (0x0E47, 0x00008), (0x0E48, 0x10008),
    (0x0E4C, 0x00008), (0x0E4F, 0x20000), (0x0EB1, 0x00008), (0x0EB2, 0x20000), (0x0EB3, 0x00080), (0x0EB4, 0x00008),
    (0x0EB8, 0x10008), (0x0EBB, 0x00008), (0x0EBD, 0x20000), (0x0EC8, 0x10008), (0x0ECC, 0x00008), (0x0ECF, 0x20000),
    (0x0F18, 0x10008), (0x0F1A, 0x20000), (0x0F35, 0x10008), (0x0F36, 0x20000), (0x0F37, 0x10008), (0x0F38, 0x20000),
    (0x0F39, 0x10008), (0x0F3A, 0x20000), (0x0F3E, 0x00080), (0x0F40, 0x20000), (0x0F71, 0x10008), (0x0F73, 0x00008),
    (0x0F74, 0x10008), (0x0F75, 0x00008), (0x0F7A, 0x10008), (0x0F7E, 0x00008), (0x0F7F, 0x00080), (0x0F80, 0x10008),
    (0x0F81, 0x00008), (0x0F82, 0x10008), (0x0F85, 0x20000), (0x0F86, 0x10008), (0x0F88, 0x20000), (0x0F8D, 0x00008),
    (0x0F98, 0x20000), (0x0F99, 0x00008), (0x0FBD, 0x20000), (0x0FC6, 0x10008), (0x0FC7, 0x20000), (0x102D, 0x00008),
    (0x1031, 0x00080), (0x1032, 0x00008), (0x1037, 0x10008), (0x1038, 0x20000), (0x1039, 0x10008), (0x103B, 0x00080),
    (0x103D, 0x00008), (0x103F, 0x20000), (0x1056, 0x00080), (0x1058, 0x00008), (0x105A, 0x20000), (0x105E, 0x00008),
    (0x1061, 0x20000), (0x1071, 0x00008), (0x1075, 0x20000), (0x1082, 0x00008), (0x1083, 0x20000), (0x1084, 0x00080),
    (0x1085, 0x00008), (0x1087, 0x20000), (0x108D, 0x10008), (0x108E, 0x20000), (0x109D, 0x00008), (0x109E, 0x20000),
    (0x1100, 0x00100), (0x1160, 0x00200), (0x11A8, 0x00400), (0x1200, 0x20000), (0x135D, 0x10008), (0x1360, 0x20000),
    (0x1712, 0x00008), (0x1714, 0x10008), (0x1715, 0x00080), (0x1716, 0x20000), (0x1732, 0x00008), (0x1734, 0x00080),
    (0x1735, 0x20000), (0x1752, 0x00008), (0x1754, 0x20000), (0x1772, 0x00008), (0x1774, 0x20000), (0x17B4, 0x00008),
    (0x17B6, 0x00080), (0x17B7, 0x00008), (0x17BE, 0x00080), (0x17C6, 0x00008), (0x17C7, 0x00080), (0x17C9, 0x00008),
    (0x17D2, 0x10008), (0x17D3, 0x00008), (0x17D4, 0x20000), (0x17DD, 0x10008), (0x17DE, 0x20000), (0x180B, 0x00008),
    (0x180E, 0x00004), (0x180F, 0x00008), (0x1810, 0x20000), (0x1885, 0x00008), (0x1887, 0x20000), (0x18A9, 0x10008),
    (0x18AA, 0x20000), (0x1920, 0x00008), (0x1923, 0x00080), (0x1927, 0x00008), (0x1929, 0x00080), (0x192C, 0x20000),
    (0x1930, 0x00080), (0x1932, 0x00008), (0x1933, 0x00080), (0x1939, 0x10008), (0x193C, 0x20000), (0x1A17, 0x10008),
    (0x1A19, 0x00080), (0x1A1B, 0x00008), (0x1A1C, 0x20000), (0x1A55, 0x00080), (0x1A56, 0x00008), (0x1A57, 0x00080),
    (0x1A58, 0x00008), (0x1A5F, 0x20000), (0x1A60, 0x10008), (0x1A61, 0x20000), (0x1A62, 0x00008), (0x1A63, 0x20000),
    (0x1A65, 0x00008), (0x1A6D, 0x00080), (0x1A73, 0x00008), (0x1A75, 0x10008), (0x1A7D, 0x20000), (0x1A7F, 0x10008),
    (0x1A80, 0x20000), (0x1AB0, 0x10008), (0x1ABE, 0x00008), (0x1ABF, 0x10008), (0x1ACF, 0x20000), (0x1B00, 0x00008),
    (0x1B04, 0x00080), (0x1B05, 0x20000), (0x1B34, 0x10008), (0x1B35, 0x00008), (0x1B3B, 0x00080), (0x1B3C, 0x00008),
    (0x1B3D, 0x00080), (0x1B42, 0x00008), (0x1B43, 0x00080), (0x1B45, 0x20000), (0x1B6B, 0x10008), (0x1B74, 0x20000),
    (0x1B80, 0x00008), (0x1B82, 0x00080), (0x1B83, 0x20000), (0x1BA1, 0x00080), (0x1BA2, 0x00008), (0x1BA6, 0x00080),
    (0x1BA8, 0x00008), (0x1BAA, 0x00080), (0x1BAB, 0x10008), (0x1BAC, 0x00008), (0x1BAE, 0x20000), (0x1BE6, 0x10008),
    (0x1BE7, 0x00080), (0x1BE8, 0x00008), (0x1BEA, 0x00080), (0x1BED, 0x00008), (0x1BEE, 0x00080), (0x1BEF, 0x00008),
    (0x1BF2, 0x00080), (0x1BF4, 0x20000), (0x1C24, 0x00080), (0x1C2C, 0x00008), (0x1C34, 0x00080), (0x1C36, 0x00008),
    (0x1C37, 0x10008), (0x1C38, 0x20000), (0x1CD0, 0x10008), (0x1CD3, 0x20000), (0x1CD4, 0x10008), (0x1CE1, 0x00080),
    (0x1CE2, 0x10008), (0x1CE9, 0x20000), (0x1CED, 0x10008), (0x1CEE, 0x20000), (0x1CF4, 0x10008), (0x1CF5, 0x20000),
    (0x1CF7, 0x00080), (0x1CF8, 0x10008), (0x1CFA, 0x20000), (0x1DC0, 0x10008), (0x1E00, 0x20000), (0x200B, 0x00004),
    (0x200C, 0x00008), (0x200D, 0x10010), (0x200E, 0x00004), (0x2010, 0x20000), (0x2028, 0x00004), (0x202F, 0x20000),
    (0x203C, 0x02000), (0x203D, 0x20000), (0x2049, 0x02000), (0x204A, 0x20000), (0x2060, 0x00004), (0x2070, 0x20000),
    (0x20D0, 0x10008), (0x20DD, 0x00008), (0x20E1, 0x10008), (0x20E2, 0x00008), (0x20E5, 0x10008), (0x20F1, 0x20000),
    (0x2122, 0x02000), (0x2123, 0x20000), (0x2139, 0x02000), (0x213A, 0x20000), (0x2194, 0x02000), (0x219A, 0x20000),
    (0x21A9, 0x02000), (0x21AB, 0x20000), (0x231A, 0x02000), (0x231C, 0x20000), (0x2328, 0x02000), (0x2329, 0x20000),
    (0x2388, 0x02000), (0x2389, 0x20000), (0x23CF, 0x02000), (0x23D0, 0x20000), (0x23E9, 0x02000), (0x23F4, 0x20000),
    (0x23F8, 0x02000), (0x23FB, 0x20000), (0x24C2, 0x02000), (0x24C3, 0x20000), (0x25AA, 0x02000), (0x25AC, 0x20000),
    (0x25B6, 0x02000), (0x25B7, 0x20000), (0x25C0, 0x02000), (0x25C1, 0x20000), (0x25FB, 0x02000), (0x25FF, 0x20000),
    (0x2600, 0x02000), (0x2606, 0x20000), (0x2607, 0x02000), (0x2613, 0x20000), (0x2614, 0x02000), (0x2686, 0x20000),
    (0x2690, 0x02000), (0x2706, 0x20000), (0x2708, 0x02000), (0x2713, 0x20000), (0x2714, 0x02000), (0x2715, 0x20000),
    (0x2716, 0x02000), (0x2717, 0x20000), (0x271D, 0x02000), (0x271E, 0x20000), (0x2721, 0x02000), (0x2722, 0x20000),
    (0x2728, 0x02000), (0x2729, 0x20000), (0x2733, 0x02000), (0x2735, 0x20000), (0x2744, 0x02000), (0x2745, 0x20000),
    (0x2747, 0x02000), (0x2748, 0x20000), (0x274C, 0x02000), (0x274D, 0x20000), (0x274E, 0x02000), (0x274F, 0x20000),
    (0x2753, 0x02000), (0x2756, 0x20000), (0x2757, 0x02000), (0x2758, 0x20000), (0x2763, 0x02000), (0x2768, 0x20000),
    (0x2795, 0x02000), (0x2798, 0x20000), (0x27A1, 0x02000), (0x27A2, 0x20000), (0x27B0, 0x02000), (0x27B1, 0x20000),
    (0x27BF, 0x02000), (0x27C0, 0x20000), (0x2934, 0x02000), (0x2936, 0x20000), (0x2B05, 0x02000), (0x2B08, 0x20000),
    (0x2B1B, 0x02000), (0x2B1D, 0x20000), (0x2B50, 0x02000), (0x2B51, 0x20000), (0x2B55, 0x02000), (0x2B56, 0x20000),
    (0x2CEF, 0x10008), (0x2CF2, 0x20000), (0x2D7F, 0x10008), (0x2D80, 0x20000), (0x2DE0, 0x10008), (0x2E00, 0x20000),
    (0x302A, 0x10008), (0x3030, 0x02000), (0x3031, 0x20000), (0x303D, 0x02000), (0x303E, 0x20000), (0x3099, 0x10008),
    (0x309B, 0x20000), (0x3297, 0x02000), (0x3298, 0x20000), (0x3299, 0x02000), (0x329A, 0x20000), (0xA66F, 0x10008),
    (0xA670, 0x00008), (0xA673, 0x20000), (0xA674, 0x10008), (0xA67E, 0x20000), (0xA69E, 0x10008), (0xA6A0, 0x20000),
    (0xA6F0, 0x10008), (0xA6F2, 0x20000), (0xA802, 0x00008), (0xA803, 0x20000), (0xA806, 0x10008), (0xA807, 0x20000),
    (0xA80B, 0x00008), (0xA80C, 0x20000), (0xA823, 0x00080), (0xA825, 0x00008), (0xA827, 0x00080), (0xA828, 0x20000),
    (0xA82C, 0x10008), (0xA82D, 0x20000), (0xA880, 0x00080), (0xA882, 0x20000), (0xA8B4, 0x00080), (0xA8C4, 0x10008),
    (0xA8C5, 0x00008), (0xA8C6, 0x20000), (0xA8E0, 0x10008), (0xA8F2, 0x20000), (0xA8FF, 0x00008), (0xA900, 0x20000),
    (0xA926, 0x00008), (0xA92B, 0x10008), (0xA92E, 0x20000), (0xA947, 0x00008), (0xA952, 0x00080), (0xA954, 0x20000),
    (0xA960, 0x00100), (0xA97D, 0x20000), (0xA980, 0x00008), (0xA983, 0x00080), (0xA984, 0x20000), (0xA9B3, 0x10008),
    (0xA9B4, 0x00080), (0xA9B6, 0x00008), (0xA9BA, 0x00080), (0xA9BC, 0x00008), (0xA9BE, 0x00080), (0xA9C1, 0x20000),
    (0xA9E5, 0x00008), (0xA9E6, 0x20000), (0xAA29, 0x00008), (0xAA2F, 0x00080), (0xAA31, 0x00008), (0xAA33, 0x00080),
    (0xAA35, 0x00008), (0xAA37, 0x20000), (0xAA43, 0x00008), (0xAA44, 0x20000), (0xAA4C, 0x00008), (0xAA4D, 0x00080),
    (0xAA4E, 0x20000), (0xAA7C, 0x00008), (0xAA7D, 0x20000), (0xAAB0, 0x10008), (0xAAB1, 0x20000), (0xAAB2, 0x10008),
    (0xAAB5, 0x20000), (0xAAB7, 0x10008), (0xAAB9, 0x20000), (0xAABE, 0x10008), (0xAAC0, 0x20000), (0xAAC1, 0x10008),
    (0xAAC2, 0x20000), (0xAAEB, 0x00080), (0xAAEC, 0x00008), (0xAAEE, 0x00080), (0xAAF0, 0x20000), (0xAAF5, 0x00080),
    (0xAAF6, 0x10008), (0xAAF7, 0x20000), (0xABE3, 0x00080), (0xABE5, 0x00008), (0xABE6, 0x00080), (0xABE8, 0x00008),
    (0xABE9, 0x00080), (0xABEB, 0x20000), (0xABEC, 0x00080), (0xABED, 0x10008), (0xABEE, 0x20000), (0xAC00, 0x00800),
    (0xAC01, 0x01000), (0xAC1C, 0x00800), (0xAC1D, 0x01000), (0xAC38, 0x00800), (0xAC39, 0x01000), (0xAC54, 0x00800),
    (0xAC55, 0x01000), (0xAC70, 0x00800), (0xAC71, 0x01000), (0xAC8C, 0x00800), (0xAC8D, 0x01000), (0xACA8, 0x00800),
    (0xACA9, 0x01000), (0xACC4, 0x00800), (0xACC5, 0x01000), (0xACE0, 0x00800), (0xACE1, 0x01000), (0xACFC, 0x00800),
    (0xACFD, 0x01000), (0xAD18, 0x00800), (0xAD19, 0x01000), (0xAD34, 0x00800), (0xAD35, 0x01000), (0xAD50, 0x00800),
    (0xAD51, 0x01000), (0xAD6C, 0x00800), (0xAD6D, 0x01000), (0xAD88, 0x00800), (0xAD89, 0x01000), (0xADA4, 0x00800),
    (0xADA5, 0x01000), (0xADC0, 0x00800), (0xADC1, 0x01000), (0xADDC, 0x00800), (0xADDD, 0x01000), (0xADF8, 0x00800),
    (0xADF9, 0x01000), (0xAE14, 0x00800), (0xAE15, 0x01000), (0xAE30, 0x00800), (0xAE31, 0x01000), (0xAE4C, 0x00800),
    (0xAE4D, 0x01000), (0xAE68, 0x00800), (0xAE69, 0x01000), (0xAE84, 0x00800), (0xAE85, 0x01000), (0xAEA0, 0x00800),
    (0xAEA1, 0x01000), (0xAEBC, 0x00800), (0xAEBD, 0x01000), (0xAED8, 0x00800), (0xAED9, 0x01000), (0xAEF4, 0x00800),
    (0xAEF5, 0x01000), (0xAF10, 0x00800), (0xAF11, 0x01000), (0xAF2C, 0x00800), (0xAF2D, 0x01000), (0xAF48, 0x00800),
    (0xAF49, 0x01000), (0xAF64, 0x00800), (0xAF65, 0x01000), (0xAF80, 0x00800), (0xAF81, 0x01000), (0xAF9C, 0x00800),
    (0xAF9D, 0x01000), (0xAFB8, 0x00800), (0xAFB9, 0x01000), (0xAFD4, 0x00800), (0xAFD5, 0x01000), (0xAFF0, 0x00800),
    (0xAFF1, 0x01000), (0xB00C, 0x00800), (0xB00D, 0x01000), (0xB028, 0x00800), (0xB029, 0x01000), (0xB044, 0x00800),
    (0xB045, 0x01000), (0xB060, 0x00800), (0xB061, 0x01000), (0xB07C, 0x00800), (0xB07D, 0x01000), (0xB098, 0x00800),
    (0xB099, 0x01000), (0xB0B4, 0x00800), (0xB0B5, 0x01000), (0xB0D0, 0x00800), (0xB0D1, 0x01000), (0xB0EC, 0x00800),
    (0xB0ED, 0x01000), (0xB108, 0x00800), (0xB109, 0x01000), (0xB124, 0x00800), (0xB125, 0x01000), (0xB140, 0x00800),
    (0xB141, 0x01000), (0xB15C, 0x00800), (0xB15D, 0x01000), (0xB178, 0x00800), (0xB179, 0x01000), (0xB194, 0x00800),
    (0xB195, 0x01000), (0xB1B0, 0x00800), (0xB1B1, 0x01000), (0xB1CC, 0x00800), (0xB1CD, 0x01000), (0xB1E8, 0x00800),
    (0xB1E9, 0x01000), (0xB204, 0x00800), (0xB205, 0x01000), (0xB220, 0x00800), (0xB221, 0x01000), (0xB23C, 0x00800),
    (0xB23D, 0x01000), (0xB258, 0x00800), (0xB259, 0x01000), (0xB274, 0x00800), (0xB275, 0x01000), (0xB290, 0x00800),
    (0xB291, 0x01000), (0xB2AC, 0x00800), (0xB2AD, 0x01000), (0xB2C8, 0x00800), (0xB2C9, 0x01000), (0xB2E4, 0x00800),
    (0xB2E5, 0x01000), (0xB300, 0x00800), (0xB301, 0x01000), (0xB31C, 0x00800), (0xB31D, 0x01000), (0xB338, 0x00800),
    (0xB339, 0x01000), (0xB354, 0x00800), (0xB355, 0x01000), (0xB370, 0x00800), (0xB371, 0x01000), (0xB38C, 0x00800),
    (0xB38D, 0x01000), (0xB3A8, 0x00800), (0xB3A9, 0x01000), (0xB3C4, 0x00800), (0xB3C5, 0x01000), (0xB3E0, 0x00800),
    (0xB3E1, 0x01000), (0xB3FC, 0x00800), (0xB3FD, 0x01000), (0xB418, 0x00800), (0xB419, 0x01000), (0xB434, 0x00800),
    (0xB435, 0x01000), (0xB450, 0x00800), (0xB451, 0x01000), (0xB46C, 0x00800), (0xB46D, 0x01000), (0xB488, 0x00800),
    (0xB489, 0x01000), (0xB4A4, 0x00800), (0xB4A5, 0x01000), (0xB4C0, 0x00800), (0xB4C1, 0x01000), (0xB4DC, 0x00800),
    (0xB4DD, 0x01000), (0xB4F8, 0x00800), (0xB4F9, 0x01000), (0xB514, 0x00800), (0xB515, 0x01000), (0xB530, 0x00800),
    (0xB531, 0x01000), (0xB54C, 0x00800), (0xB54D, 0x01000), (0xB568, 0x00800), (0xB569, 0x01000), (0xB584, 0x00800),
    (0xB585, 0x01000), (0xB5A0, 0x00800), (0xB5A1, 0x01000), (0xB5BC, 0x00800), (0xB5BD, 0x01000), (0xB5D8, 0x00800),
    (0xB5D9, 0x01000), (0xB5F4, 0x00800), (0xB5F5, 0x01000), (0xB610, 0x00800), (0xB611, 0x01000), (0xB62C, 0x00800),
    (0xB62D, 0x01000), (0xB648, 0x00800), (0xB649, 0x01000), (0xB664, 0x00800), (0xB665, 0x01000), (0xB680, 0x00800),
    (0xB681, 0x01000), (0xB69C, 0x00800), (0xB69D, 0x01000), (0xB6B8, 0x00800), (0xB6B9, 0x01000), (0xB6D4, 0x00800),
    (0xB6D5, 0x01000), (0xB6F0, 0x00800), (0xB6F1, 0x01000), (0xB70C, 0x00800), (0xB70D, 0x01000), (0xB728, 0x00800),
    (0xB729, 0x01000), (0xB744, 0x00800), (0xB745, 0x01000), (0xB760, 0x00800), (0xB761, 0x01000), (0xB77C, 0x00800),
    (0xB77D, 0x01000), (0xB798, 0x00800), (0xB799, 0x01000), (0xB7B4, 0x00800), (0xB7B5, 0x01000), (0xB7D0, 0x00800),
    (0xB7D1, 0x01000), (0xB7EC, 0x00800), (0xB7ED, 0x01000), (0xB808, 0x00800), (0xB809, 0x01000), (0xB824, 0x00800),
    (0xB825, 0x01000), (0xB840, 0x00800), (0xB841, 0x01000), (0xB85C, 0x00800), (0xB85D, 0x01000), (0xB878, 0x00800),
    (0xB879, 0x01000), (0xB894, 0x00800), (0xB895, 0x01000), (0xB8B0, 0x00800), (0xB8B1, 0x01000), (0xB8CC, 0x00800),
    (0xB8CD, 0x01000), (0xB8E8, 0x00800), (0xB8E9, 0x01000), (0xB904, 0x00800), (0xB905, 0x01000), (0xB920, 0x00800),
    (0xB921, 0x01000), (0xB93C, 0x00800), (0xB93D, 0x01000), (0xB958, 0x00800), (0xB959, 0x01000), (0xB974, 0x00800),
    (0xB975, 0x01000), (0xB990, 0x00800), (0xB991, 0x01000), (0xB9AC, 0x00800), (0xB9AD, 0x01000), (0xB9C8, 0x00800),
    (0xB9C9, 0x01000), (0xB9E4, 0x00800), (0xB9E5, 0x01000), (0xBA00, 0x00800), (0xBA01, 0x01000), (0xBA1C, 0x00800),
    (0xBA1D, 0x01000), (0xBA38, 0x00800), (0xBA39, 0x01000), (0xBA54, 0x00800), (0xBA55, 0x01000), (0xBA70, 0x00800),
    (0xBA71, 0x01000), (0xBA8C, 0x00800), (0xBA8D, 0x01000), (0xBAA8, 0x00800), (0xBAA9, 0x01000), (0xBAC4, 0x00800),
    (0xBAC5, 0x01000), (0xBAE0, 0x00800), (0xBAE1, 0x01000), (0xBAFC, 0x00800), (0xBAFD, 0x01000), (0xBB18, 0x00800),
    (0xBB19, 0x01000), (0xBB34, 0x00800), (0xBB35, 0x01000), (0xBB50, 0x00800), (0xBB51, 0x01000), (0xBB6C, 0x00800),
    (0xBB6D, 0x01000), (0xBB88, 0x00800), (0xBB89, 0x01000), (0xBBA4, 0x00800), (0xBBA5, 0x01000), (0xBBC0, 0x00800),
    (0xBBC1, 0x01000), (0xBBDC, 0x00800), (0xBBDD, 0x01000), (0xBBF8, 0x00800), (0xBBF9, 0x01000), (0xBC14, 0x00800),
    (0xBC15, 0x01000), (0xBC30, 0x00800), (0xBC31, 0x01000), (0xBC4C, 0x00800), (0xBC4D, 0x01000), (0xBC68, 0x00800),
    (0xBC69, 0x01000), (0xBC84, 0x00800), (0xBC85, 0x01000), (0xBCA0, 0x00800), (0xBCA1, 0x01000), (0xBCBC, 0x00800),
    (0xBCBD, 0x01000), (0xBCD8, 0x00800), (0xBCD9, 0x01000), (0xBCF4, 0x00800), (0xBCF5, 0x01000), (0xBD10, 0x00800),
    (0xBD11, 0x01000), (0xBD2C, 0x00800), (0xBD2D, 0x01000), (0xBD48, 0x00800), (0xBD49, 0x01000), (0xBD64, 0x00800),
    (0xBD65, 0x01000), (0xBD80, 0x00800), (0xBD81, 0x01000), (0xBD9C, 0x00800), (0xBD9D, 0x01000), (0xBDB8, 0x00800),
    (0xBDB9, 0x01000), (0xBDD4, 0x00800), (0xBDD5, 0x01000), (0xBDF0, 0x00800), (0xBDF1, 0x01000), (0xBE0C, 0x00800),
    (0xBE0D, 0x01000), (0xBE28, 0x00800), (0xBE29, 0x01000), (0xBE44, 0x00800), (0xBE45, 0x01000), (0xBE60, 0x00800),
    (0xBE61, 0x01000), (0xBE7C, 0x00800), (0xBE7D, 0x01000), (0xBE98, 0x00800), (0xBE99, 0x01000), (0xBEB4, 0x00800),
    (0xBEB5, 0x01000), (0xBED0, 0x00800), (0xBED1, 0x01000), (0xBEEC, 0x00800), (0xBEED, 0x01000), (0xBF08, 0x00800),
    (0xBF09, 0x01000), (0xBF24, 0x00800), (0xBF25, 0x01000), (0xBF40, 0x00800), (0xBF41, 0x01000), (0xBF5C, 0x00800),
    (0xBF5D, 0x01000), (0xBF78, 0x00800), (0xBF79, 0x01000), (0xBF94, 0x00800), (0xBF95, 0x01000), (0xBFB0, 0x00800),
    (0xBFB1, 0x01000), (0xBFCC, 0x00800), (0xBFCD, 0x01000), (0xBFE8, 0x00800), (0xBFE9, 0x01000), (0xC004, 0x00800),
    (0xC005, 0x01000), (0xC020, 0x00800), (0xC021, 0x01000), (0xC03C, 0x00800), (0xC03D, 0x01000), (0xC058, 0x00800),
    (0xC059, 0x01000), (0xC074, 0x00800), (0xC075, 0x01000), (0xC090, 0x00800), (0xC091, 0x01000), (0xC0AC, 0x00800),
    (0xC0AD, 0x01000), (0xC0C8, 0x00800), (0xC0C9, 0x01000), (0xC0E4, 0x00800), (0xC0E5, 0x01000), (0xC100, 0x00800),
    (0xC101, 0x01000), (0xC11C, 0x00800), (0xC11D, 0x01000), (0xC138, 0x00800), (0xC139, 0x01000), (0xC154, 0x00800),
    (0xC155, 0x01000), (0xC170, 0x00800), (0xC171, 0x01000), (0xC18C, 0x00800), (0xC18D, 0x01000), (0xC1A8, 0x00800),
    (0xC1A9, 0x01000), (0xC1C4, 0x00800), (0xC1C5, 0x01000), (0xC1E0, 0x00800), (0xC1E1, 0x01000), (0xC1FC, 0x00800),
    (0xC1FD, 0x01000), (0xC218, 0x00800), (0xC219, 0x01000), (0xC234, 0x00800), (0xC235, 0x01000), (0xC250, 0x00800),
    (0xC251, 0x01000), (0xC26C, 0x00800), (0xC26D, 0x01000), (0xC288, 0x00800), (0xC289, 0x01000), (0xC2A4, 0x00800),
    (0xC2A5, 0x01000), (0xC2C0, 0x00800), (0xC2C1, 0x01000), (0xC2DC, 0x00800), (0xC2DD, 0x01000), (0xC2F8, 0x00800),
    (0xC2F9, 0x01000), (0xC314, 0x00800), (0xC315, 0x01000), (0xC330, 0x00800), (0xC331, 0x01000), (0xC34C, 0x00800),
    (0xC34D, 0x01000), (0xC368, 0x00800), (0xC369, 0x01000), (0xC384, 0x00800), (0xC385, 0x01000), (0xC3A0, 0x00800),
    (0xC3A1, 0x01000), (0xC3BC, 0x00800), (0xC3BD, 0x01000), (0xC3D8, 0x00800), (0xC3D9, 0x01000), (0xC3F4, 0x00800),
    (0xC3F5, 0x01000), (0xC410, 0x00800), (0xC411, 0x01000), (0xC42C, 0x00800), (0xC42D, 0x01000), (0xC448, 0x00800),
    (0xC449, 0x01000), (0xC464, 0x00800), (0xC465, 0x01000), (0xC480, 0x00800), (0xC481, 0x01000), (0xC49C, 0x00800),
    (0xC49D, 0x01000), (0xC4B8, 0x00800), (0xC4B9, 0x01000), (0xC4D4, 0x00800), (0xC4D5, 0x01000), (0xC4F0, 0x00800),
    (0xC4F1, 0x01000), (0xC50C, 0x00800), (0xC50D, 0x01000), (0xC528, 0x00800), (0xC529, 0x01000), (0xC544, 0x00800),
    (0xC545, 0x01000), (0xC560, 0x00800), (0xC561, 0x01000), (0xC57C, 0x00800), (0xC57D, 0x01000), (0xC598, 0x00800),
    (0xC599, 0x01000), (0xC5B4, 0x00800), (0xC5B5, 0x01000), (0xC5D0, 0x00800), (0xC5D1, 0x01000), (0xC5EC, 0x00800),
    (0xC5ED, 0x01000), (0xC608, 0x00800), (0xC609, 0x01000), (0xC624, 0x00800), (0xC625, 0x01000), (0xC640, 0x00800),
    (0xC641, 0x01000), (0xC65C, 0x00800), (0xC65D, 0x01000), (0xC678, 0x00800), (0xC679, 0x01000), (0xC694, 0x00800),
    (0xC695, 0x01000), (0xC6B0, 0x00800), (0xC6B1, 0x01000), (0xC6CC, 0x00800), (0xC6CD, 0x01000), (0xC6E8, 0x00800),
    (0xC6E9, 0x01000), (0xC704, 0x00800), (0xC705, 0x01000), (0xC720, 0x00800), (0xC721, 0x01000), (0xC73C, 0x00800),
    (0xC73D, 0x01000), (0xC758, 0x00800), (0xC759, 0x01000), (0xC774, 0x00800), (0xC775, 0x01000), (0xC790, 0x00800),
    (0xC791, 0x01000), (0xC7AC, 0x00800), (0xC7AD, 0x01000), (0xC7C8, 0x00800), (0xC7C9, 0x01000), (0xC7E4, 0x00800),
    (0xC7E5, 0x01000), (0xC800, 0x00800), (0xC801, 0x01000), (0xC81C, 0x00800), (0xC81D, 0x01000), (0xC838, 0x00800),
    (0xC839, 0x01000), (0xC854, 0x00800), (0xC855, 0x01000), (0xC870, 0x00800), (0xC871, 0x01000), (0xC88C, 0x00800),
    (0xC88D, 0x01000), (0xC8A8, 0x00800), (0xC8A9, 0x01000), (0xC8C4, 0x00800), (0xC8C5, 0x01000), (0xC8E0, 0x00800),
    (0xC8E1, 0x01000), (0xC8FC, 0x00800), (0xC8FD, 0x01000), (0xC918, 0x00800), (0xC919, 0x01000), (0xC934, 0x00800),
    (0xC935, 0x01000), (0xC950, 0x00800), (0xC951, 0x01000), (0xC96C, 0x00800), (0xC96D, 0x01000), (0xC988, 0x00800),
    (0xC989, 0x01000), (0xC9A4, 0x00800), (0xC9A5, 0x01000), (0xC9C0, 0x00800), (0xC9C1, 0x01000), (0xC9DC, 0x00800),
    (0xC9DD, 0x01000), (0xC9F8, 0x00800), (0xC9F9, 0x01000), (0xCA14, 0x00800), (0xCA15, 0x01000), (0xCA30, 0x00800),
    (0xCA31, 0x01000), (0xCA4C, 0x00800), (0xCA4D, 0x01000), (0xCA68, 0x00800), (0xCA69, 0x01000), (0xCA84, 0x00800),
    (0xCA85, 0x01000), (0xCAA0, 0x00800), (0xCAA1, 0x01000), (0xCABC, 0x00800), (0xCABD, 0x01000), (0xCAD8, 0x00800),
    (0xCAD9, 0x01000), (0xCAF4, 0x00800), (0xCAF5, 0x01000), (0xCB10, 0x00800), (0xCB11, 0x01000), (0xCB2C, 0x00800),
    (0xCB2D, 0x01000), (0xCB48, 0x00800), (0xCB49, 0x01000), (0xCB64, 0x00800), (0xCB65, 0x01000), (0xCB80, 0x00800),
    (0xCB81, 0x01000), (0xCB9C, 0x00800), (0xCB9D, 0x01000), (0xCBB8, 0x00800), (0xCBB9, 0x01000), (0xCBD4, 0x00800),
    (0xCBD5, 0x01000), (0xCBF0, 0x00800), (0xCBF1, 0x01000), (0xCC0C, 0x00800), (0xCC0D, 0x01000), (0xCC28, 0x00800),
    (0xCC29, 0x01000), (0xCC44, 0x00800), (0xCC45, 0x01000), (0xCC60, 0x00800), (0xCC61, 0x01000), (0xCC7C, 0x00800),
    (0xCC7D, 0x01000), (0xCC98, 0x00800), (0xCC99, 0x01000), (0xCCB4, 0x00800), (0xCCB5, 0x01000), (0xCCD0, 0x00800),
    (0xCCD1, 0x01000), (0xCCEC, 0x00800), (0xCCED, 0x01000), (0xCD08, 0x00800), (0xCD09, 0x01000), (0xCD24, 0x00800),
    (0xCD25, 0x01000), (0xCD40, 0x00800), (0xCD41, 0x01000), (0xCD5C, 0x00800), (0xCD5D, 0x01000), (0xCD78, 0x00800),
    (0xCD79, 0x01000), (0xCD94, 0x00800), (0xCD95, 0x01000), (0xCDB0, 0x00800), (0xCDB1, 0x01000), (0xCDCC, 0x00800),
    (0xCDCD, 0x01000), (0xCDE8, 0x00800), (0xCDE9, 0x01000), (0xCE04, 0x00800), (0xCE05, 0x01000), (0xCE20, 0x00800),
    (0xCE21, 0x01000), (0xCE3C, 0x00800), (0xCE3D, 0x01000), (0xCE58, 0x00800), (0xCE59, 0x01000), (0xCE74, 0x00800),
    (0xCE75, 0x01000), (0xCE90, 0x00800), (0xCE91, 0x01000), (0xCEAC, 0x00800), (0xCEAD, 0x01000), (0xCEC8, 0x00800),
    (0xCEC9, 0x01000), (0xCEE4, 0x00800), (0xCEE5, 0x01000), (0xCF00, 0x00800), (0xCF01, 0x01000), (0xCF1C, 0x00800),
    (0xCF1D, 0x01000), (0xCF38, 0x00800), (0xCF39, 0x01000), (0xCF54, 0x00800), (0xCF55, 0x01000), (0xCF70, 0x00800),
    (0xCF71, 0x01000), (0xCF8C, 0x00800), (0xCF8D, 0x01000), (0xCFA8, 0x00800), (0xCFA9, 0x01000), (0xCFC4, 0x00800),
    (0xCFC5, 0x01000), (0xCFE0, 0x00800), (0xCFE1, 0x01000), (0xCFFC, 0x00800), (0xCFFD, 0x01000), (0xD018, 0x00800),
    (0xD019, 0x01000), (0xD034, 0x00800), (0xD035, 0x01000), (0xD050, 0x00800), (0xD051, 0x01000), (0xD06C, 0x00800),
    (0xD06D, 0x01000), (0xD088, 0x00800), (0xD089, 0x01000), (0xD0A4, 0x00800), (0xD0A5, 0x01000), (0xD0C0, 0x00800),
    (0xD0C1, 0x01000), (0xD0DC, 0x00800), (0xD0DD, 0x01000), (0xD0F8, 0x00800), (0xD0F9, 0x01000), (0xD114, 0x00800),
    (0xD115, 0x01000), (0xD130, 0x00800), (0xD131, 0x01000), (0xD14C, 0x00800), (0xD14D, 0x01000), (0xD168, 0x00800),
    (0xD169, 0x01000), (0xD184, 0x00800), (0xD185, 0x01000), (0xD1A0, 0x00800), (0xD1A1, 0x01000), (0xD1BC, 0x00800),
    (0xD1BD, 0x01000), (0xD1D8, 0x00800), (0xD1D9, 0x01000), (0xD1F4, 0x00800), (0xD1F5, 0x01000), (0xD210, 0x00800),
    (0xD211, 0x01000), (0xD22C, 0x00800), (0xD22D, 0x01000), (0xD248, 0x00800), (0xD249, 0x01000), (0xD264, 0x00800),
    (0xD265, 0x01000), (0xD280, 0x00800), (0xD281, 0x01000), (0xD29C, 0x00800), (0xD29D, 0x01000), (0xD2B8, 0x00800),
    (0xD2B9, 0x01000), (0xD2D4, 0x00800), (0xD2D5, 0x01000), (0xD2F0, 0x00800), (0xD2F1, 0x01000), (0xD30C, 0x00800),
    (0xD30D, 0x01000), (0xD328, 0x00800), (0xD329, 0x01000), (0xD344, 0x00800), (0xD345, 0x01000), (0xD360, 0x00800),
    (0xD361, 0x01000), (0xD37C, 0x00800), (0xD37D, 0x01000), (0xD398, 0x00800), (0xD399, 0x01000), (0xD3B4, 0x00800),
    (0xD3B5, 0x01000), (0xD3D0, 0x00800), (0xD3D1, 0x01000), (0xD3EC, 0x00800), (0xD3ED, 0x01000), (0xD408, 0x00800),
    (0xD409, 0x01000), (0xD424, 0x00800), (0xD425, 0x01000), (0xD440, 0x00800), (0xD441, 0x01000), (0xD45C, 0x00800),
    (0xD45D, 0x01000), (0xD478, 0x00800), (0xD479, 0x01000), (0xD494, 0x00800), (0xD495, 0x01000), (0xD4B0, 0x00800),
    (0xD4B1, 0x01000), (0xD4CC, 0x00800), (0xD4CD, 0x01000), (0xD4E8, 0x00800), (0xD4E9, 0x01000), (0xD504, 0x00800),
    (0xD505, 0x01000), (0xD520, 0x00800), (0xD521, 0x01000), (0xD53C, 0x00800), (0xD53D, 0x01000), (0xD558, 0x00800),
    (0xD559, 0x01000), (0xD574, 0x00800), (0xD575, 0x01000), (0xD590, 0x00800), (0xD591, 0x01000), (0xD5AC, 0x00800),
    (0xD5AD, 0x01000), (0xD5C8, 0x00800), (0xD5C9, 0x01000), (0xD5E4, 0x00800), (0xD5E5, 0x01000), (0xD600, 0x00800),
    (0xD601, 0x01000), (0xD61C, 0x00800), (0xD61D, 0x01000), (0xD638, 0x00800), (0xD639, 0x01000), (0xD654, 0x00800),
    (0xD655, 0x01000), (0xD670, 0x00800), (0xD671, 0x01000), (0xD68C, 0x00800), (0xD68D, 0x01000), (0xD6A8, 0x00800),
    (0xD6A9, 0x01000), (0xD6C4, 0x00800), (0xD6C5, 0x01000), (0xD6E0, 0x00800), (0xD6E1, 0x01000), (0xD6FC, 0x00800),
    (0xD6FD, 0x01000), (0xD718, 0x00800), (0xD719, 0x01000), (0xD734, 0x00800), (0xD735, 0x01000), (0xD750, 0x00800),
    (0xD751, 0x01000), (0xD76C, 0x00800), (0xD76D, 0x01000), (0xD788, 0x00800), (0xD789, 0x01000), (0xD7A4, 0x20000),
    (0xD7B0, 0x00200), (0xD7C7, 0x20000), (0xD7CB, 0x00400), (0xD7FC, 0x20000), (0xFB1E, 0x10008), (0xFB1F, 0x20000),
    (0xFE00, 0x00008), (0xFE10, 0x20000), (0xFE20, 0x10008), (0xFE30, 0x20000), (0xFEFF, 0x00004), (0xFF00, 0x20000),
    (0xFF9E, 0x00008), (0xFFA0, 0x20000), (0xFFF0, 0x00004), (0xFFFC, 0x20000), (0x101FD, 0x10008), (0x101FE, 0x20000),
    (0x102E0, 0x10008), (0x102E1, 0x20000), (0x10376, 0x10008), (0x1037B, 0x20000), (0x10A01, 0x00008), (0x10A04, 0x20000),
    (0x10A05, 0x00008), (0x10A07, 0x20000), (0x10A0C, 0x00008), (0x10A0D, 0x10008), (0x10A0E, 0x00008), (0x10A0F, 0x10008),
    (0x10A10, 0x20000), (0x10A38, 0x10008), (0x10A3B, 0x20000), (0x10A3F, 0x10008), (0x10A40, 0x20000), (0x10AE5, 0x10008),
    (0x10AE7, 0x20000), (0x10D24, 0x10008), (0x10D28, 0x20000), (0x10EAB, 0x10008), (0x10EAD, 0x20000), (0x10EFD, 0x10008),
    (0x10F00, 0x20000), (0x10F46, 0x10008), (0x10F51, 0x20000), (0x10F82, 0x10008), (0x10F86, 0x20000), (0x11000, 0x00080),
    (0x11001, 0x00008), (0x11002, 0x00080), (0x11003, 0x20000), (0x11038, 0x00008), (0x11046, 0x10008), (0x11047, 0x20000),
    (0x11070, 0x10008), (0x11071, 0x20000), (0x11073, 0x00008), (0x11075, 0x20000), (0x1107F, 0x10008), (0x11080, 0x00008),
    (0x11082, 0x00080), (0x11083, 0x20000), (0x110B0, 0x00080), (0x110B3, 0x00008), (0x110B7, 0x00080), (0x110B9, 0x10008),
    (0x110BB, 0x20000), (0x110BD, 0x00040), (0x110BE, 0x20000), (0x110C2, 0x00008), (0x110C3, 0x20000), (0x110CD, 0x00040),
    (0x110CE, 0x20000), (0x11100, 0x10008), (0x11103, 0x20000), (0x11127, 0x00008), (0x1112C, 0x00080), (0x1112D, 0x00008),
    (0x11133, 0x10008), (0x11135, 0x20000), (0x11145, 0x00080), (0x11147, 0x20000), (0x11173, 0x10008), (0x11174, 0x20000),
    (0x11180, 0x00008), (0x11182, 0x00080), (0x11183, 0x20000), (0x111B3, 0x00080), (0x111B6, 0x00008), (0x111BF, 0x00080),
    (0x111C1, 0x20000), (0x111C2, 0x00040), (0x111C4, 0x20000), (0x111C9, 0x00008), (0x111CA, 0x10008), (0x111CB, 0x00008),
    (0x111CD, 0x20000), (0x111CE, 0x00080), (0x111CF, 0x00008), (0x111D0, 0x20000), (0x1122C, 0x00080), (0x1122F, 0x00008),
    (0x11232, 0x00080), (0x11234, 0x00008), (0x11235, 0x00080), (0x11236, 0x10008), (0x11237, 0x00008), (0x11238, 0x20000),
    (0x1123E, 0x00008), (0x1123F, 0x20000), (0x11241, 0x00008), (0x11242, 0x20000), (0x112DF, 0x00008), (0x112E0, 0x00080),
    (0x112E3, 0x00008), (0x112E9, 0x10008), (0x112EB, 0x20000), (0x11300, 0x00008), (0x11302, 0x00080), (0x11304, 0x20000),
    (0x1133B, 0x10008), (0x1133D, 0x20000), (0x1133E, 0x00008), (0x1133F, 0x00080), (0x11340, 0x00008), (0x11341, 0x00080),
    (0x11345, 0x20000), (0x11347, 0x00080), (0x11349, 0x20000), (0x1134B, 0x00080), (0x1134E, 0x20000), (0x11357, 0x00008),
    (0x11358, 0x20000), (0x11362, 0x00080), (0x11364, 0x20000), (0x11366, 0x10008), (0x1136D, 0x20000), (0x11370, 0x10008),
    (0x11375, 0x20000), (0x11435, 0x00080), (0x11438, 0x00008), (0x11440, 0x00080), (0x11442, 0x10008), (0x11443, 0x00008),
    (0x11445, 0x00080), (0x11446, 0x10008), (0x11447, 0x20000), (0x1145E, 0x10008), (0x1145F, 0x20000), (0x114B0, 0x00008),
    (0x114B1, 0x00080), (0x114B3, 0x00008), (0x114B9, 0x00080), (0x114BA, 0x00008), (0x114BB, 0x00080), (0x114BD, 0x00008),
    (0x114BE, 0x00080), (0x114BF, 0x00008), (0x114C1, 0x00080), (0x114C2, 0x10008), (0x114C4, 0x20000), (0x115AF, 0x00008),
    (0x115B0, 0x00080), (0x115B2, 0x00008), (0x115B6, 0x20000), (0x115B8, 0x00080), (0x115BC, 0x00008), (0x115BE, 0x00080),
    (0x115BF, 0x10008), (0x115C1, 0x20000), (0x115DC, 0x00008), (0x115DE, 0x20000), (0x11630, 0x00080), (0x11633, 0x00008),
    (0x1163B, 0x00080), (0x1163D, 0x00008), (0x1163E, 0x00080), (0x1163F, 0x10008), (0x11640, 0x00008), (0x11641, 0x20000),
    (0x116AB, 0x00008), (0x116AC, 0x00080), (0x116AD, 0x00008), (0x116AE, 0x00080), (0x116B0, 0x00008), (0x116B6, 0x00080),
    (0x116B7, 0x10008), (0x116B8, 0x20000), (0x1171D, 0x00008), (0x11720, 0x20000), (0x11722, 0x00008), (0x11726, 0x00080),
    (0x11727, 0x00008), (0x1172B, 0x10008), (0x1172C, 0x20000), (0x1182C, 0x00080), (0x1182F, 0x00008), (0x11838, 0x00080),
    (0x11839, 0x10008), (0x1183B, 0x20000), (0x11930, 0x00008), (0x11931, 0x00080), (0x11936, 0x20000), (0x11937, 0x00080),
    (0x11939, 0x20000), (0x1193B, 0x00008), (0x1193D, 0x00080), (0x1193E, 0x10008), (0x1193F, 0x00040), (0x11940, 0x00080),
    (0x11941, 0x00040), (0x11942, 0x00080), (0x11943, 0x10008), (0x11944, 0x20000), (0x119D1, 0x00080), (0x119D4, 0x00008),
    (0x119D8, 0x20000), (0x119DA, 0x00008), (0x119DC, 0x00080), (0x119E0, 0x10008), (0x119E1, 0x20000), (0x119E4, 0x00080),
    (0x119E5, 0x20000), (0x11A01, 0x00008), (0x11A0B, 0x20000), (0x11A33, 0x00008), (0x11A34, 0x10008), (0x11A35, 0x00008),
    (0x11A39, 0x00080), (0x11A3A, 0x00040), (0x11A3B, 0x00008), (0x11A3F, 0x20000), (0x11A47, 0x10008), (0x11A48, 0x20000),
    (0x11A51, 0x00008), (0x11A57, 0x00080), (0x11A59, 0x00008), (0x11A5C, 0x20000), (0x11A84, 0x00040), (0x11A8A, 0x00008),
    (0x11A97, 0x00080), (0x11A98, 0x00008), (0x11A99, 0x10008), (0x11A9A, 0x20000), (0x11C2F, 0x00080), (0x11C30, 0x00008),
    (0x11C37, 0x20000), (0x11C38, 0x00008), (0x11C3E, 0x00080), (0x11C3F, 0x10008), (0x11C40, 0x20000), (0x11C92, 0x00008),
    (0x11CA8, 0x20000), (0x11CA9, 0x00080), (0x11CAA, 0x00008), (0x11CB1, 0x00080), (0x11CB2, 0x00008), (0x11CB4, 0x00080),
    (0x11CB5, 0x00008), (0x11CB7, 0x20000), (0x11D31, 0x00008), (0x11D37, 0x20000), (0x11D3A, 0x00008), (0x11D3B, 0x20000),
    (0x11D3C, 0x00008), (0x11D3E, 0x20000), (0x11D3F, 0x00008), (0x11D42, 0x10008), (0x11D43, 0x00008), (0x11D44, 0x10008),
    (0x11D46, 0x00040), (0x11D47, 0x00008), (0x11D48, 0x20000), (0x11D8A, 0x00080), (0x11D8F, 0x20000), (0x11D90, 0x00008),
    (0x11D92, 0x20000), (0x11D93, 0x00080), (0x11D95, 0x00008), (0x11D96, 0x00080), (0x11D97, 0x10008), (0x11D98, 0x20000),
    (0x11EF3, 0x00008), (0x11EF5, 0x00080), (0x11EF7, 0x20000), (0x11F00, 0x00008), (0x11F02, 0x00040), (0x11F03, 0x00080),
    (0x11F04, 0x20000), (0x11F34, 0x00080), (0x11F36, 0x00008), (0x11F3B, 0x20000), (0x11F3E, 0x00080), (0x11F40, 0x00008),
    (0x11F41, 0x00080), (0x11F42, 0x10008), (0x11F43, 0x20000), (0x13430, 0x00004), (0x13440, 0x00008), (0x13441, 0x20000),
    (0x13447, 0x00008), (0x13456, 0x20000), (0x16AF0, 0x10008), (0x16AF5, 0x20000), (0x16B30, 0x10008), (0x16B37, 0x20000),
    (0x16F4F, 0x00008), (0x16F50, 0x20000), (0x16F51, 0x00080), (0x16F88, 0x20000), (0x16F8F, 0x00008), (0x16F93, 0x20000),
    (0x16FE4, 0x00008), (0x16FE5, 0x20000), (0x16FF0, 0x00080), (0x16FF2, 0x20000), (0x1BC9D, 0x00008), (0x1BC9E, 0x10008),
    (0x1BC9F, 0x20000), (0x1BCA0, 0x00004), (0x1BCA4, 0x20000), (0x1CF00, 0x00008), (0x1CF2E, 0x20000), (0x1CF30, 0x00008),
    (0x1CF47, 0x20000), (0x1D165, 0x10008), (0x1D166, 0x00080), (0x1D167, 0x10008), (0x1D16A, 0x20000), (0x1D16D, 0x00080),
    (0x1D16E, 0x10008), (0x1D173, 0x00004), (0x1D17B, 0x10008), (0x1D183, 0x20000), (0x1D185, 0x10008), (0x1D18C, 0x20000),
    (0x1D1AA, 0x10008), (0x1D1AE, 0x20000), (0x1D242, 0x10008), (0x1D245, 0x20000), (0x1DA00, 0x00008), (0x1DA37, 0x20000),
    (0x1DA3B, 0x00008), (0x1DA6D, 0x20000), (0x1DA75, 0x00008), (0x1DA76, 0x20000), (0x1DA84, 0x00008), (0x1DA85, 0x20000),
    (0x1DA9B, 0x00008), (0x1DAA0, 0x20000), (0x1DAA1, 0x00008), (0x1DAB0, 0x20000), (0x1E000, 0x10008), (0x1E007, 0x20000),
    (0x1E008, 0x10008), (0x1E019, 0x20000), (0x1E01B, 0x10008), (0x1E022, 0x20000), (0x1E023, 0x10008), (0x1E025, 0x20000),
    (0x1E026, 0x10008), (0x1E02B, 0x20000), (0x1E08F, 0x10008), (0x1E090, 0x20000), (0x1E130, 0x10008), (0x1E137, 0x20000),
    (0x1E2AE, 0x10008), (0x1E2AF, 0x20000), (0x1E2EC, 0x10008), (0x1E2F0, 0x20000), (0x1E4EC, 0x10008), (0x1E4F0, 0x20000),
    (0x1E8D0, 0x10008), (0x1E8D7, 0x20000), (0x1E944, 0x10008), (0x1E94B, 0x20000), (0x1F000, 0x02000), (0x1F100, 0x20000),
    (0x1F10D, 0x02000), (0x1F110, 0x20000), (0x1F12F, 0x02000), (0x1F130, 0x20000), (0x1F16C, 0x02000), (0x1F172, 0x20000),
    (0x1F17E, 0x02000), (0x1F180, 0x20000), (0x1F18E, 0x02000), (0x1F18F, 0x20000), (0x1F191, 0x02000), (0x1F19B, 0x20000),
    (0x1F1AD, 0x02000), (0x1F1E6, 0x00020), (0x1F200, 0x20000), (0x1F201, 0x02000), (0x1F210, 0x20000), (0x1F21A, 0x02000),
    (0x1F21B, 0x20000), (0x1F22F, 0x02000), (0x1F230, 0x20000), (0x1F232, 0x02000), (0x1F23B, 0x20000), (0x1F23C, 0x02000),
    (0x1F240, 0x20000), (0x1F249, 0x02000), (0x1F3FB, 0x00008), (0x1F400, 0x02000), (0x1F53E, 0x20000), (0x1F546, 0x02000),
    (0x1F650, 0x20000), (0x1F680, 0x02000), (0x1F700, 0x20000), (0x1F774, 0x02000), (0x1F780, 0x20000), (0x1F7D5, 0x02000),
    (0x1F800, 0x20000), (0x1F80C, 0x02000), (0x1F810, 0x20000), (0x1F848, 0x02000), (0x1F850, 0x20000), (0x1F85A, 0x02000),
    (0x1F860, 0x20000), (0x1F888, 0x02000), (0x1F890, 0x20000), (0x1F8AE, 0x02000), (0x1F900, 0x20000), (0x1F90C, 0x02000),
    (0x1F93B, 0x20000), (0x1F93C, 0x02000), (0x1F946, 0x20000), (0x1F947, 0x02000), (0x1FB00, 0x20000), (0x1FC00, 0x02000),
    (0x1FFFE, 0x20000), (0xE0000, 0x00004), (0xE0020, 0x00008), (0xE0080, 0x00004), (0xE0100, 0x00008), (0xE01F0, 0x00004),
    (0xE1000, 0x20000),
];

pub(crate) static GRAPHEME_ASCII: [u32; 128] = [
    0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004,
    0x00004, 0x00004, 0x00002, 0x00004, 0x00004, 0x00001, 0x00004, 0x00004,
    0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004,
    0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004, 0x00004,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000,
    0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x20000, 0x00004,
];

/// Word_Break plus Extended_Pictographic
pub(crate) static WORD_RANGES: &[(u32, u32)] = &[
    (0x0000, 0x80000), (0x000A, 0x00002), (0x000B, 0x00004), (0x000D, 0x00001), (0x000E, 0x80000), (0x0020, 0x20000),
    (0x0021, 0x80000), (0x0022, 0x00800), (0x0023, 0x80000), (0x0027, 0x00400), (0x0028, 0x80000), (0x002C, 0x04000),
    (0x002D, 0x80000), (0x002E, 0x01000), (0x002F, 0x80000), (0x0030, 0x08000), (0x003A, 0x02000), (0x003B, 0x04000),
    (0x003C, 0x80000), (0x0041, 0x00200), (0x005B, 0x80000), (0x005F, 0x10000), (0x0060, 0x80000), (0x0061, 0x00200),
    (0x007B, 0x80000), (0x0085, 0x00004), (0x0086, 0x80000), (0x00A9, 0x40000), (0x00AA, 0x00200), (0x00AB, 0x80000),
    (0x00AD, 0x00040), (0x00AE, 0x40000), (0x00AF, 0x80000), (0x00B5, 0x00200), (0x00B6, 0x80000), (0x00B7, 0x02000),
    (0x00B8, 0x80000), (0x00BA, 0x00200), (0x00BB, 0x80000), (0x00C0, 0x00200), (0x00D7, 0x80000), (0x00D8, 0x00200),
    (0x00F7, 0x80000), (0x00F8, 0x00200), (0x02D8, 0x80000), (0x02DE, 0x00200), (0x0300, 0x00008), (0x0370, 0x00200),
    (0x0375, 0x80000), (0x0376, 0x00200), (0x0378, 0x80000), (0x037A, 0x00200), (0x037E, 0x04000), (0x037F, 0x00200),
    (0x0380, 0x80000), (0x0386, 0x00200), (0x0387, 0x02000), (0x0388, 0x00200), (0x038B, 0x80000), (0x038C, 0x00200),
    (0x038D, 0x80000), (0x038E, 0x00200), (0x03A2, 0x80000), (0x03A3, 0x00200), (0x03F6, 0x80000), (0x03F7, 0x00200),
    (0x0482, 0x80000), (0x0483, 0x00008), (0x048A, 0x00200), (0x0530, 0x80000), (0x0531, 0x00200), (0x0557, 0x80000),
    (0x0559, 0x00200), (0x055D, 0x80000), (0x055E, 0x00200), (0x055F, 0x02000), (0x0560, 0x00200), (0x0589, 0x04000),
    (0x058A, 0x00200), (0x058B, 0x80000), (0x0591, 0x00008), (0x05BE, 0x80000), (0x05BF, 0x00008), (0x05C0, 0x80000),
    (0x05C1, 0x00008), (0x05C3, 0x80000), (0x05C4, 0x00008), (0x05C6, 0x80000), (0x05C7, 0x00008), (0x05C8, 0x80000),
    (0x05D0, 0x00100), (0x05EB, 0x80000), (0x05EF, 0x00100), (0x05F3, 0x00200), (0x05F4, 0x02000), (0x05F5, 0x80000),
    (0x0600, 0x08000), (0x0606, 0x80000), (0x060C, 0x04000), (0x060E, 0x80000), (0x0610, 0x00008), (0x061B, 0x80000),
    (0x061C, 0x00040), (0x061D, 0x80000), (0x0620, 0x00200), (0x064B, 0x00008), (0x0660, 0x08000), (0x066A, 0x80000),
    (0x066B, 0x08000), (0x066C, 0x04000), (0x066D, 0x80000), (0x066E, 0x00200), (0x0670, 0x00008), (0x0671, 0x00200),
    (0x06D4, 0x80000), (0x06D5, 0x00200), (0x06D6, 0x00008), (0x06DD, 0x08000), (0x06DE, 0x80000), (0x06DF, 0x00008),
    (0x06E5, 0x00200), (0x06E7, 0x00008), (0x06E9, 0x80000), (0x06EA, 0x00008), (0x06EE, 0x00200), (0x06F0, 0x08000),
    (0x06FA, 0x00200), (0x06FD, 0x80000), (0x06FF, 0x00200), (0x0700, 0x80000), (0x070F, 0x00200), (0x0711, 0x00008),
    (0x0712, 0x00200), (0x0730, 0x00008), (0x074B, 0x80000), (0x074D, 0x00200), (0x07A6, 0x00008), (0x07B1, 0x00200),
    (0x07B2, 0x80000), (0x07C0, 0x08000), (0x07CA, 0x00200), (0x07EB, 0x00008), (0x07F4, 0x00200), (0x07F6, 0x80000),
    (0x07F8, 0x04000), (0x07F9, 0x80000), (0x07FA, 0x00200), (0x07FB, 0x80000), (0x07FD, 0x00008), (0x07FE, 0x80000),
    (0x0800, 0x00200), (0x0816, 0x00008), (0x081A, 0x00200), (0x081B, 0x00008), (0x0824, 0x00200), (0x0825, 0x00008),
    (0x0828, 0x00200), (0x0829, 0x00008), (0x082E, 0x80000), (0x0840, 0x00200), (0x0859, 0x00008), (0x085C, 0x80000),
    (0x0860, 0x00200), (0x086B, 0x80000), (0x0870, 0x00200), (0x0888, 0x80000), (0x0889, 0x00200), (0x088F, 0x80000),
    (0x0890, 0x08000), (0x0892, 0x80000), (0x0898, 0x00008), (0x08A0, 0x00200), (0x08CA, 0x00008), (0x08E2, 0x08000),
    (0x08E3, 0x00008), (0x0904, 0x00200), (0x093A, 0x00008), (0x093D, 0x00200), (0x093E, 0x00008), (0x0950, 0x00200),
    (0x0951, 0x00008), (0x0958, 0x00200), (0x0962, 0x00008), (0x0964, 0x80000), (0x0966, 0x08000), (0x0970, 0x80000),
    (0x0971, 0x00200), (0x0981, 0x00008), (0x0984, 0x80000), (0x0985, 0x00200), (0x098D, 0x80000), (0x098F, 0x00200),
    (0x0991, 0x80000), (0x0993, 0x00200), (0x09A9, 0x80000), (0x09AA, 0x00200), (0x09B1, 0x80000), (0x09B2, 0x00200),
    (0x09B3, 0x80000), (0x09B6, 0x00200), (0x09BA, 0x80000), (0x09BC, 0x00008), (0x09BD, 0x00200), (0x09BE, 0x00008),
    (0x09C5, 0x80000), (0x09C7, 0x00008), (0x09C9, 0x80000), (0x09CB, 0x00008), (0x09CE, 0x00200), (0x09CF, 0x80000),
    (0x09D7, 0x00008), (0x09D8, 0x80000), (0x09DC, 0x00200), (0x09DE, 0x80000), (0x09DF, 0x00200), (0x09E2, 0x00008),
    (0x09E4, 0x80000), (0x09E6, 0x08000), (0x09F0, 0x00200), (0x09F2, 0x80000), (0x09FC, 0x00200), (0x09FD, 0x80000),
    (0x09FE, 0x00008), (0x09FF, 0x80000), (0x0A01, 0x00008), (0x0A04, 0x80000), (0x0A05, 0x00200), (0x0A0B, 0x80000),
    (0x0A0F, 0x00200), (0x0A11, 0x80000), (0x0A13, 0x00200), (0x0A29, 0x80000), (0x0A2A, 0x00200), (0x0A31, 0x80000),
    (0x0A32, 0x00200), (0x0A34, 0x80000), (0x0A35, 0x00200), (0x0A37, 0x80000), (0x0A38, 0x00200), (0x0A3A, 0x80000),
    (0x0A3C, 0x00008), (0x0A3D, 0x80000), (0x0A3E, 0x00008), (0x0A43, 0x80000), (0x0A47, 0x00008), (0x0A49, 0x80000),
    (0x0A4B, 0x00008), (0x0A4E, 0x80000), (0x0A51, 0x00008), (0x0A52, 0x80000), (0x0A59, 0x00200), (0x0A5D, 0x80000),
    (0x0A5E, 0x00200), (0x0A5F, 0x80000), (0x0A66, 0x08000), (0x0A70, 0x00008), (0x0A72, 0x00200), (0x0A75, 0x00008),
    (0x0A76, 0x80000), (0x0A81, 0x00008), (0x0A84, 0x80000), (0x0A85, 0x00200), (0x0A8E, 0x80000), (0x0A8F, 0x00200),
    (0x0A92, 0x80000), (0x0A93, 0x00200), (0x0AA9, 0x80000), (0x0AAA, 0x00200), (0x0AB1, 0x80000), (0x0AB2, 0x00200),
    (0x0AB4, 0x80000), (0x0AB5, 0x00200), (0x0ABA, 0x80000), (0x0ABC, 0x00008), (0x0ABD, 0x00200), (0x0ABE, 0x00008),
    (0x0AC6, 0x80000), (0x0AC7, 0x00008), (0x0ACA, 0x80000), (0x0ACB, 0x00008), (0x0ACE, 0x80000), (0x0AD0, 0x00200),
    (0x0AD1, 0x80000), (0x0AE0, 0x00200), (0x0AE2, 0x00008), (0x0AE4, 0x80000), (0x0AE6, 0x08000), (0x0AF0, 0x80000),
    (0x0AF9, 0x00200), (0x0AFA, 0x00008), (0x0B00, 0x80000), (0x0B01, 0x00008), (0x0B04, 0x80000), (0x0B05, 0x00200),
    (0x0B0D, 0x80000), (0x0B0F, 0x00200), (0x0B11, 0x80000), (0x0B13, 0x00200), (0x0B29, 0x80000), (0x0B2A, 0x00200),
    (0x0B31, 0x80000), (0x0B32, 0x00200), (0x0B34, 0x80000), (0x0B35, 0x00200), (0x0B3A, 0x80000), (0x0B3C, 0x00008),
    (0x0B3D, 0x00200), (0x0B3E, 0x00008), (0x0B45, 0x80000), (0x0B47, 0x00008), (0x0B49, 0x80000), (0x0B4B, 0x00008),
    (0x0B4E, 0x80000), (0x0B55, 0x00008), (0x0B58, 0x80000), (0x0B5C, 0x00200), (0x0B5E, 0x80000), (0x0B5F, 0x00200),
    (0x0B62, 0x00008), (0x0B64, 0x80000), (0x0B66, 0x08000), (0x0B70, 0x80000), (0x0B71, 0x00200), (0x0B72, 0x80000),
    (0x0B82, 0x00008), (0x0B83, 0x00200), (0x0B84, 0x80000), (0x0B85, 0x00200), (0x0B8B, 0x80000), (0x0B8E, 0x00200),
    (0x0B91, 0x80000), (0x0B92, 0x00200), (0x0B96, 0x80000), (0x0B99, 0x00200), (0x0B9B, 0x80000), (0x0B9C, 0x00200),
    (0x0B9D, 0x80000), (0x0B9E, 0x00200), (0x0BA0, 0x80000), (0x0BA3, 0x00200), (0x0BA5, 0x80000), (0x0BA8, 0x00200),
    (0x0BAB, 0x80000), (0x0BAE, 0x00200), (0x0BBA, 0x80000), (0x0BBE, 0x00008), (0x0BC3, 0x80000), (0x0BC6, 0x00008),
    (0x0BC9, 0x80000), (0x0BCA, 0x00008), (0x0BCE, 0x80000), (0x0BD0, 0x00200), (0x0BD1, 0x80000), (0x0BD7, 0x00008),
    (0x0BD8, 0x80000), (0x0BE6, 0x08000), (0x0BF0, 0x80000), (0x0C00, 0x00008), (0x0C05, 0x00200), (0x0C0D, 0x80000),
    (0x0C0E, 0x00200), (0x0C11, 0x80000), (0x0C12, 0x00200), (0x0C29, 0x80000), (0x0C2A, 0x00200), (0x0C3A, 0x80000),
    (0x0C3C, 0x00008), (0x0C3D, 0x00200), (0x0C3E, 0x00008), (0x0C45, 0x80000), (0x0C46, 0x00008), (0x0C49, 0x80000),
    (0x0C4A, 0x00008), (0x0C4E, 0x80000), (0x0C55, 0x00008), (0x0C57, 0x80000), (0x0C58, 0x00200), (0x0C5B, 0x80000),
    (0x0C5D, 0x00200), (0x0C5E, 0x80000), (0x0C60, 0x00200), (0x0C62, 0x00008), (0x0C64, 0x80000), (0x0C66, 0x08000),
    (0x0C70, 0x80000), (0x0C80, 0x00200), (0x0C81, 0x00008), (0x0C84, 0x80000), (0x0C85, 0x00200), (0x0C8D, 0x80000),
    (0x0C8E, 0x00200), (0x0C91, 0x80000), (0x0C92, 0x00200), (0x0CA9, 0x80000), (0x0CAA, 0x00200), (0x0CB4, 0x80000),
    (0x0CB5, 0x00200), (0x0CBA, 0x80000), (0x0CBC, 0x00008), (0x0CBD, 0x00200), (0x0CBE, 0x00008), (0x0CC5, 0x80000),
    (0x0CC6, 0x00008), (0x0CC9, 0x80000), (0x0CCA, 0x00008), (0x0CCE, 0x80000), (0x0CD5, 0x00008), (0x0CD7, 0x80000),
    (0x0CDD, 0x00200), (0x0CDF, 0x80000), (0x0CE0, 0x00200), (0x0CE2, 0x00008), (0x0CE4, 0x80000), (0x0CE6, 0x08000),
    (0x0CF0, 0x80000), (0x0CF1, 0x00200), (0x0CF3, 0x00008), (0x0CF4, 0x80000), (0x0D00, 0x00008), (0x0D04, 0x00200),
    (0x0D0D, 0x80000), (0x0D0E, 0x00200), (0x0D11, 0x80000), (0x0D12, 0x00200), (0x0D3B, 0x00008), (0x0D3D, 0x00200),
    (0x0D3E, 0x00008), (0x0D45, 0x80000), (0x0D46, 0x00008), (0x0D49, 0x80000), (0x0D4A, 0x00008), (0x0D4E, 0x00200),
    (0x0D4F, 0x80000), (0x0D54, 0x00200), (0x0D57, 0x00008), (0x0D58, 0x80000), (0x0D5F, 0x00200), (0x0D62, 0x00008),
    (0x0D64, 0x80000), (0x0D66, 0x08000), (0x0D70, 0x80000), (0x0D7A, 0x00200), (0x0D80, 0x80000), (0x0D81, 0x00008),
    (0x0D84, 0x80000), (0x0D85, 0x00200), (0x0D97, 0x80000), (0x0D9A, 0x00200), (0x0DB2, 0x80000), (0x0DB3, 0x00200),
    (0x0DBC, 0x80000), (0x0DBD, 0x00200), (0x0DBE, 0x80000), (0x0DC0, 0x00200), (0x0DC7, 0x80000), (0x0DCA, 0x00008),
    (0x0DCB, 0x80000), (0x0DCF, 0x00008), (0x0DD5, 0x80000), (0x0DD6, 0x00008), (0x0DD7, 0x80000), (0x0DD8, 0x00008),
    (0x0DE0, 0x80000), (0x0DE6, 0x08000), (0x0DF0, 0x80000), (0x0DF2, 0x00008), (0x0DF4, 0x80000), (0x0E31, 0x00008),
    (0x0E32, 0x80000), (0x0E34, 0x00008), (0x0E3B, 0x80000), (0x0E47, 0x00008), (0x0E4F, 0x80000), (0x0E50, 0x08000),
    (0x0E5A, 0x80000), (0x0EB1, 0x00008), (0x0EB2, 0x80000), (0x0EB4, 0x00008), (0x0EBD, 0x80000), (0x0EC8, 0x00008),
    (0x0ECF, 0x80000), (0x0ED0, 0x08000), (0x0EDA, 0x80000), (0x0F00, 0x00200), (0x0F01, 0x80000), (0x0F18, 0x00008),
    (0x0F1A, 0x80000), (0x0F20, 0x08000), (0x0F2A, 0x80000), (0x0F35, 0x00008), (0x0F36, 0x80000), (0x0F37, 0x00008),
    (0x0F38, 0x80000), (0x0F39, 0x00008), (0x0F3A, 0x80000), (0x0F3E, 0x00008), (0x0F40, 0x00200), (0x0F48, 0x80000),
    (0x0F49, 0x00200), (0x0F6D, 0x80000), (0x0F71, 0x00008), (0x0F85, 0x80000), (0x0F86, 0x00008), (0x0F88, 0x00200),
    (0x0F8D, 0x00008), (0x0F98, 0x80000), (0x0F99, 0x00008), (0x0FBD, 0x80000), (0x0FC6, 0x00008), (0x0FC7, 0x80000),
    (0x102B, 0x00008), (0x103F, 0x80000), (0x1040, 0x08000), (0x104A, 0x80000), (0x1056, 0x00008), (0x105A, 0x80000),
    (0x105E, 0x00008), (0x1061, 0x80000), (0x1062, 0x00008), (0x1065, 0x80000), (0x1067, 0x00008), (0x106E, 0x80000),
    (0x1071, 0x00008), (0x1075, 0x80000), (0x1082, 0x00008), (0x108E, 0x80000), (0x108F, 0x00008), (0x1090, 0x08000),
    (0x109A, 0x00008), (0x109E, 0x80000), (0x10A0, 0x00200), (0x10C6, 0x80000), (0x10C7, 0x00200), (0x10C8, 0x80000),
    (0x10CD, 0x00200), (0x10CE, 0x80000), (0x10D0, 0x00200), (0x10FB, 0x80000), (0x10FC, 0x00200), (0x1249, 0x80000),
    (0x124A, 0x00200), (0x124E, 0x80000), (0x1250, 0x00200), (0x1257, 0x80000), (0x1258, 0x00200), (0x1259, 0x80000),
    (0x125A, 0x00200), (0x125E, 0x80000), (0x1260, 0x00200), (0x1289, 0x80000), (0x128A, 0x00200), (0x128E, 0x80000),
    (0x1290, 0x00200), (0x12B1, 0x80000), (0x12B2, 0x00200), (0x12B6, 0x80000), (0x12B8, 0x00200), (0x12BF, 0x80000),
    (0x12C0, 0x00200), (0x12C1, 0x80000), (0x12C2, 0x00200), (0x12C6, 0x80000), (0x12C8, 0x00200), (0x12D7, 0x80000),
    (0x12D8, 0x00200), (0x1311, 0x80000), (0x1312, 0x00200), (0x1316, 0x80000), (0x1318, 0x00200), (0x135B, 0x80000),
    (0x135D, 0x00008), (0x1360, 0x80000), (0x1380, 0x00200), (0x1390, 0x80000), (0x13A0, 0x00200), (0x13F6, 0x80000),
    (0x13F8, 0x00200), (0x13FE, 0x80000), (0x1401, 0x00200), (0x166D, 0x80000), (0x166F, 0x00200), (0x1680, 0x20000),
    (0x1681, 0x00200), (0x169B, 0x80000), (0x16A0, 0x00200), (0x16EB, 0x80000), (0x16EE, 0x00200), (0x16F9, 0x80000),
    (0x1700, 0x00200), (0x1712, 0x00008), (0x1716, 0x80000), (0x171F, 0x00200), (0x1732, 0x00008), (0x1735, 0x80000),
    (0x1740, 0x00200), (0x1752, 0x00008), (0x1754, 0x80000), (0x1760, 0x00200), (0x176D, 0x80000), (0x176E, 0x00200),
    (0x1771, 0x80000), (0x1772, 0x00008), (0x1774, 0x80000), (0x17B4, 0x00008), (0x17D4, 0x80000), (0x17DD, 0x00008),
    (0x17DE, 0x80000), (0x17E0, 0x08000), (0x17EA, 0x80000), (0x180B, 0x00008), (0x180E, 0x00040), (0x180F, 0x00008),
    (0x1810, 0x08000), (0x181A, 0x80000), (0x1820, 0x00200), (0x1879, 0x80000), (0x1880, 0x00200), (0x1885, 0x00008),
    (0x1887, 0x00200), (0x18A9, 0x00008), (0x18AA, 0x00200), (0x18AB, 0x80000), (0x18B0, 0x00200), (0x18F6, 0x80000),
    (0x1900, 0x00200), (0x191F, 0x80000), (0x1920, 0x00008), (0x192C, 0x80000), (0x1930, 0x00008), (0x193C, 0x80000),
    (0x1946, 0x08000), (0x1950, 0x80000), (0x19D0, 0x08000), (0x19DA, 0x80000), (0x1A00, 0x00200), (0x1A17, 0x00008),
    (0x1A1C, 0x80000), (0x1A55, 0x00008), (0x1A5F, 0x80000), (0x1A60, 0x00008), (0x1A7D, 0x80000), (0x1A7F, 0x00008),
    (0x1A80, 0x08000), (0x1A8A, 0x80000), (0x1A90, 0x08000), (0x1A9A, 0x80000), (0x1AB0, 0x00008), (0x1ACF, 0x80000),
    (0x1B00, 0x00008), (0x1B05, 0x00200), (0x1B34, 0x00008), (0x1B45, 0x00200), (0x1B4D, 0x80000), (0x1B50, 0x08000),
    (0x1B5A, 0x80000), (0x1B6B, 0x00008), (0x1B74, 0x80000), (0x1B80, 0x00008), (0x1B83, 0x00200), (0x1BA1, 0x00008),
    (0x1BAE, 0x00200), (0x1BB0, 0x08000), (0x1BBA, 0x00200), (0x1BE6, 0x00008), (0x1BF4, 0x80000), (0x1C00, 0x00200),
    (0x1C24, 0x00008), (0x1C38, 0x80000), (0x1C40, 0x08000), (0x1C4A, 0x80000), (0x1C4D, 0x00200), (0x1C50, 0x08000),
    (0x1C5A, 0x00200), (0x1C7E, 0x80000), (0x1C80, 0x00200), (0x1C89, 0x80000), (0x1C90, 0x00200), (0x1CBB, 0x80000),
    (0x1CBD, 0x00200), (0x1CC0, 0x80000), (0x1CD0, 0x00008), (0x1CD3, 0x80000), (0x1CD4, 0x00008), (0x1CE9, 0x00200),
    (0x1CED, 0x00008), (0x1CEE, 0x00200), (0x1CF4, 0x00008), (0x1CF5, 0x00200), (0x1CF7, 0x00008), (0x1CFA, 0x00200),
    (0x1CFB, 0x80000), (0x1D00, 0x00200), (0x1DC0, 0x00008), (0x1E00, 0x00200), (0x1F16, 0x80000), (0x1F18, 0x00200),
    (0x1F1E, 0x80000), (0x1F20, 0x00200), (0x1F46, 0x80000), (0x1F48, 0x00200), (0x1F4E, 0x80000), (0x1F50, 0x00200),
    (0x1F58, 0x80000), (0x1F59, 0x00200), (0x1F5A, 0x80000), (0x1F5B, 0x00200), (0x1F5C, 0x80000), (0x1F5D, 0x00200),
    (0x1F5E, 0x80000), (0x1F5F, 0x00200), (0x1F7E, 0x80000), (0x1F80, 0x00200), (0x1FB5, 0x80000), (0x1FB6, 0x00200),
    (0x1FBD, 0x80000), (0x1FBE, 0x00200), (0x1FBF, 0x80000), (0x1FC2, 0x00200), (0x1FC5, 0x80000), (0x1FC6, 0x00200),
    (0x1FCD, 0x80000), (0x1FD0, 0x00200), (0x1FD4, 0x80000), (0x1FD6, 0x00200), (0x1FDC, 0x80000), (0x1FE0, 0x00200),
    (0x1FED, 0x80000), (0x1FF2, 0x00200), (0x1FF5, 0x80000), (0x1FF6, 0x00200), (0x1FFD, 0x80000), (0x2000, 0x20000),
    (0x2007, 0x80000), (0x2008, 0x20000), (0x200B, 0x80000), (0x200C, 0x00008), (0x200D, 0x00010), (0x200E, 0x00040),
    (0x2010, 0x80000), (0x2018, 0x01000), (0x201A, 0x80000), (0x2024, 0x01000), (0x2025, 0x80000), (0x2027, 0x02000),
    (0x2028, 0x00004), (0x202A, 0x00040), (0x202F, 0x10000), (0x2030, 0x80000), (0x203C, 0x40000), (0x203D, 0x80000),
    (0x203F, 0x10000), (0x2041, 0x80000), (0x2044, 0x04000), (0x2045, 0x80000), (0x2049, 0x40000), (0x204A, 0x80000),
    (0x2054, 0x10000), (0x2055, 0x80000), (0x205F, 0x20000), (0x2060, 0x00040), (0x2065, 0x80000), (0x2066, 0x00040),
    (0x2070, 0x80000), (0x2071, 0x00200), (0x2072, 0x80000), (0x207F, 0x00200), (0x2080, 0x80000), (0x2090, 0x00200),
    (0x209D, 0x80000), (0x20D0, 0x00008), (0x20F1, 0x80000), (0x2102, 0x00200), (0x2103, 0x80000), (0x2107, 0x00200),
    (0x2108, 0x80000), (0x210A, 0x00200), (0x2114, 0x80000), (0x2115, 0x00200), (0x2116, 0x80000), (0x2119, 0x00200),
    (0x211E, 0x80000), (0x2122, 0x40000), (0x2123, 0x80000), (0x2124, 0x00200), (0x2125, 0x80000), (0x2126, 0x00200),
    (0x2127, 0x80000), (0x2128, 0x00200), (0x2129, 0x80000), (0x212A, 0x00200), (0x212E, 0x80000), (0x212F, 0x00200),
    (0x2139, 0x40200), (0x213A, 0x80000), (0x213C, 0x00200), (0x2140, 0x80000), (0x2145, 0x00200), (0x214A, 0x80000),
    (0x214E, 0x00200), (0x214F, 0x80000), (0x2160, 0x00200), (0x2189, 0x80000), (0x2194, 0x40000), (0x219A, 0x80000),
    (0x21A9, 0x40000), (0x21AB, 0x80000), (0x231A, 0x40000), (0x231C, 0x80000), (0x2328, 0x40000), (0x2329, 0x80000),
    (0x2388, 0x40000), (0x2389, 0x80000), (0x23CF, 0x40000), (0x23D0, 0x80000), (0x23E9, 0x40000), (0x23F4, 0x80000),
    (0x23F8, 0x40000), (0x23FB, 0x80000), (0x24B6, 0x00200), (0x24C2, 0x40200), (0x24C3, 0x00200), (0x24EA, 0x80000),
    (0x25AA, 0x40000), (0x25AC, 0x80000), (0x25B6, 0x40000), (0x25B7, 0x80000), (0x25C0, 0x40000), (0x25C1, 0x80000),
    (0x25FB, 0x40000), (0x25FF, 0x80000), (0x2600, 0x40000), (0x2606, 0x80000), (0x2607, 0x40000), (0x2613, 0x80000),
    (0x2614, 0x40000), (0x2686, 0x80000), (0x2690, 0x40000), (0x2706, 0x80000), (0x2708, 0x40000), (0x2713, 0x80000),
    (0x2714, 0x40000), (0x2715, 0x80000), (0x2716, 0x40000), (0x2717, 0x80000), (0x271D, 0x40000), (0x271E, 0x80000),
    (0x2721, 0x40000), (0x2722, 0x80000), (0x2728, 0x40000), (0x2729, 0x80000), (0x2733, 0x40000), (0x2735, 0x80000),
    (0x2744, 0x40000), (0x2745, 0x80000), (0x2747, 0x40000), (0x2748, 0x80000), (0x274C, 0x40000), (0x274D, 0x80000),
    (0x274E, 0x40000), (0x274F, 0x80000), (0x2753, 0x40000), (0x2756, 0x80000), (0x2757, 0x40000), (0x2758, 0x80000),
    (0x2763, 0x40000), (0x2768, 0x80000), (0x2795, 0x40000), (0x2798, 0x80000), (0x27A1, 0x40000), (0x27A2, 0x80000),
    (0x27B0, 0x40000), (0x27B1, 0x80000), (0x27BF, 0x40000), (0x27C0, 0x80000), (0x2934, 0x40000), (0x2936, 0x80000),
    (0x2B05, 0x40000), (0x2B08, 0x80000), (0x2B1B, 0x40000), (0x2B1D, 0x80000), (0x2B50, 0x40000), (0x2B51, 0x80000),
    (0x2B55, 0x40000), (0x2B56, 0x80000), (0x2C00, 0x00200), (0x2CE5, 0x80000), (0x2CEB, 0x00200), (0x2CEF, 0x00008),
    (0x2CF2, 0x00200), (0x2CF4, 0x80000), (0x2D00, 0x00200), (0x2D26, 0x80000), (0x2D27, 0x00200), (0x2D28, 0x80000),
    (0x2D2D, 0x00200), (0x2D2E, 0x80000), (0x2D30, 0x00200), (0x2D68, 0x80000), (0x2D6F, 0x00200), (0x2D70, 0x80000),
    (0x2D7F, 0x00008), (0x2D80, 0x00200), (0x2D97, 0x80000), (0x2DA0, 0x00200), (0x2DA7, 0x80000), (0x2DA8, 0x00200),
    (0x2DAF, 0x80000), (0x2DB0, 0x00200), (0x2DB7, 0x80000), (0x2DB8, 0x00200), (0x2DBF, 0x80000), (0x2DC0, 0x00200),
    (0x2DC7, 0x80000), (0x2DC8, 0x00200), (0x2DCF, 0x80000), (0x2DD0, 0x00200), (0x2DD7, 0x80000), (0x2DD8, 0x00200),
    (0x2DDF, 0x80000), (0x2DE0, 0x00008), (0x2E00, 0x80000), (0x2E2F, 0x00200), (0x2E30, 0x80000), (0x3000, 0x20000),
    (0x3001, 0x80000), (0x3005, 0x00200), (0x3006, 0x80000), (0x302A, 0x00008), (0x3030, 0x40000), (0x3031, 0x00080),
    (0x3036, 0x80000), (0x303B, 0x00200), (0x303D, 0x40000), (0x303E, 0x80000), (0x3099, 0x00008), (0x309B, 0x00080),
    (0x309D, 0x80000), (0x30A0, 0x00080), (0x30FB, 0x80000), (0x30FC, 0x00080), (0x3100, 0x80000), (0x3105, 0x00200),
    (0x3130, 0x80000), (0x3131, 0x00200), (0x318F, 0x80000), (0x31A0, 0x00200), (0x31C0, 0x80000), (0x31F0, 0x00080),
    (0x3200, 0x80000), (0x3297, 0x40000), (0x3298, 0x80000), (0x3299, 0x40000), (0x329A, 0x80000), (0x32D0, 0x00080),
    (0x32FF, 0x80000), (0x3300, 0x00080), (0x3358, 0x80000), (0xA000, 0x00200), (0xA48D, 0x80000), (0xA4D0, 0x00200),
    (0xA4FE, 0x80000), (0xA500, 0x00200), (0xA60D, 0x80000), (0xA610, 0x00200), (0xA620, 0x08000), (0xA62A, 0x00200),
    (0xA62C, 0x80000), (0xA640, 0x00200), (0xA66F, 0x00008), (0xA673, 0x80000), (0xA674, 0x00008), (0xA67E, 0x80000),
    (0xA67F, 0x00200), (0xA69E, 0x00008), (0xA6A0, 0x00200), (0xA6F0, 0x00008), (0xA6F2, 0x80000), (0xA708, 0x00200),
    (0xA7CB, 0x80000), (0xA7D0, 0x00200), (0xA7D2, 0x80000), (0xA7D3, 0x00200), (0xA7D4, 0x80000), (0xA7D5, 0x00200),
    (0xA7DA, 0x80000), (0xA7F2, 0x00200), (0xA802, 0x00008), (0xA803, 0x00200), (0xA806, 0x00008), (0xA807, 0x00200),
    (0xA80B, 0x00008), (0xA80C, 0x00200), (0xA823, 0x00008), (0xA828, 0x80000), (0xA82C, 0x00008), (0xA82D, 0x80000),
    (0xA840, 0x00200), (0xA874, 0x80000), (0xA880, 0x00008), (0xA882, 0x00200), (0xA8B4, 0x00008), (0xA8C6, 0x80000),
    (0xA8D0, 0x08000), (0xA8DA, 0x80000), (0xA8E0, 0x00008), (0xA8F2, 0x00200), (0xA8F8, 0x80000), (0xA8FB, 0x00200),
    (0xA8FC, 0x80000), (0xA8FD, 0x00200), (0xA8FF, 0x00008), (0xA900, 0x08000), (0xA90A, 0x00200), (0xA926, 0x00008),
    (0xA92E, 0x80000), (0xA930, 0x00200), (0xA947, 0x00008), (0xA954, 0x80000), (0xA960, 0x00200), (0xA97D, 0x80000),
    (0xA980, 0x00008), (0xA984, 0x00200), (0xA9B3, 0x00008), (0xA9C1, 0x80000), (0xA9CF, 0x00200), (0xA9D0, 0x08000),
    (0xA9DA, 0x80000), (0xA9E5, 0x00008), (0xA9E6, 0x80000), (0xA9F0, 0x08000), (0xA9FA, 0x80000), (0xAA00, 0x00200),
    (0xAA29, 0x00008), (0xAA37, 0x80000), (0xAA40, 0x00200), (0xAA43, 0x00008), (0xAA44, 0x00200), (0xAA4C, 0x00008),
    (0xAA4E, 0x80000), (0xAA50, 0x08000), (0xAA5A, 0x80000), (0xAA7B, 0x00008), (0xAA7E, 0x80000), (0xAAB0, 0x00008),
    (0xAAB1, 0x80000), (0xAAB2, 0x00008), (0xAAB5, 0x80000), (0xAAB7, 0x00008), (0xAAB9, 0x80000), (0xAABE, 0x00008),
    (0xAAC0, 0x80000), (0xAAC1, 0x00008), (0xAAC2, 0x80000), (0xAAE0, 0x00200), (0xAAEB, 0x00008), (0xAAF0, 0x80000),
    (0xAAF2, 0x00200), (0xAAF5, 0x00008), (0xAAF7, 0x80000), (0xAB01, 0x00200), (0xAB07, 0x80000), (0xAB09, 0x00200),
    (0xAB0F, 0x80000), (0xAB11, 0x00200), (0xAB17, 0x80000), (0xAB20, 0x00200), (0xAB27, 0x80000), (0xAB28, 0x00200),
    (0xAB2F, 0x80000), (0xAB30, 0x00200), (0xAB6A, 0x80000), (0xAB70, 0x00200), (0xABE3, 0x00008), (0xABEB, 0x80000),
    (0xABEC, 0x00008), (0xABEE, 0x80000), (0xABF0, 0x08000), (0xABFA, 0x80000), (0xAC00, 0x00200), (0xD7A4, 0x80000),
    (0xD7B0, 0x00200), (0xD7C7, 0x80000), (0xD7CB, 0x00200), (0xD7FC, 0x80000), (0xFB00, 0x00200), (0xFB07, 0x80000),
    (0xFB13, 0x00200), (0xFB18, 0x80000), (0xFB1D, 0x00100), (0xFB1E, 0x00008), (0xFB1F, 0x00100), (0xFB29, 0x80000),
    (0xFB2A, 0x00100), (0xFB37, 0x80000), (0xFB38, 0x00100), (0xFB3D, 0x80000), (0xFB3E, 0x00100), (0xFB3F, 0x80000),
    (0xFB40, 0x00100), (0xFB42, 0x80000), (0xFB43, 0x00100), (0xFB45, 0x80000), (0xFB46, 0x00100), (0xFB50, 0x00200),
    (0xFBB2, 0x80000), (0xFBD3, 0x00200), (0xFD3E, 0x80000), (0xFD50, 0x00200), (0xFD90, 0x80000), (0xFD92, 0x00200),
    (0xFDC8, 0x80000), (0xFDF0, 0x00200), (0xFDFC, 0x80000), (0xFE00, 0x00008), (0xFE10, 0x04000), (0xFE11, 0x80000),
    (0xFE13, 0x02000), (0xFE14, 0x04000), (0xFE15, 0x80000), (0xFE20, 0x00008), (0xFE30, 0x80000), (0xFE33, 0x10000),
    (0xFE35, 0x80000), (0xFE4D, 0x10000), (0xFE50, 0x04000), (0xFE51, 0x80000), (0xFE52, 0x01000), (0xFE53, 0x80000),
    (0xFE54, 0x04000), (0xFE55, 0x02000), (0xFE56, 0x80000), (0xFE70, 0x00200), (0xFE75, 0x80000), (0xFE76, 0x00200),
    (0xFEFD, 0x80000), (0xFEFF, 0x00040), (0xFF00, 0x80000), (0xFF07, 0x01000), (0xFF08, 0x80000), (0xFF0C, 0x04000),
    (0xFF0D, 0x80000), (0xFF0E, 0x01000), (0xFF0F, 0x80000), (0xFF10, 0x08000), (0xFF1A, 0x02000), (0xFF1B, 0x04000),
    (0xFF1C, 0x80000), (0xFF21, 0x00200), (0xFF3B, 0x80000), (0xFF3F, 0x10000), (0xFF40, 0x80000), (0xFF41, 0x00200),
    (0xFF5B, 0x80000), (0xFF66, 0x00080), (0xFF9E, 0x00008), (0xFFA0, 0x00200), (0xFFBF, 0x80000), (0xFFC2, 0x00200),
    (0xFFC8, 0x80000), (0xFFCA, 0x00200), (0xFFD0, 0x80000), (0xFFD2, 0x00200), (0xFFD8, 0x80000), (0xFFDA, 0x00200),
    (0xFFDD, 0x80000), (0xFFF9, 0x00040), (0xFFFC, 0x80000), (0x10000, 0x00200), (0x1000C, 0x80000), (0x1000D, 0x00200),
    (0x10027, 0x80000), (0x10028, 0x00200), (0x1003B, 0x80000), (0x1003C, 0x00200), (0x1003E, 0x80000), (0x1003F, 0x00200),
    (0x1004E, 0x80000), (0x10050, 0x00200), (0x1005E, 0x80000), (0x10080, 0x00200), (0x100FB, 0x80000), (0x10140, 0x00200),
    (0x10175, 0x80000), (0x101FD, 0x00008), (0x101FE, 0x80000), (0x10280, 0x00200), (0x1029D, 0x80000), (0x102A0, 0x00200),
    (0x102D1, 0x80000), (0x102E0, 0x00008), (0x102E1, 0x80000), (0x10300, 0x00200), (0x10320, 0x80000), (0x1032D, 0x00200),
    (0x1034B, 0x80000), (0x10350, 0x00200), (0x10376, 0x00008), (0x1037B, 0x80000), (0x10380, 0x00200), (0x1039E, 0x80000),
    (0x103A0, 0x00200), (0x103C4, 0x80000), (0x103C8, 0x00200), (0x103D0, 0x80000), (0x103D1, 0x00200), (0x103D6, 0x80000),
    (0x10400, 0x00200), (0x1049E, 0x80000), (0x104A0, 0x08000), (0x104AA, 0x80000), (0x104B0, 0x00200), (0x104D4, 0x80000),
    (0x104D8, 0x00200), (0x104FC, 0x80000), (0x10500, 0x00200), (0x10528, 0x80000), (0x10530, 0x00200), (0x10564, 0x80000),
    (0x10570, 0x00200), (0x1057B, 0x80000), (0x1057C, 0x00200), (0x1058B, 0x80000), (0x1058C, 0x00200), (0x10593, 0x80000),
    (0x10594, 0x00200), (0x10596, 0x80000), (0x10597, 0x00200), (0x105A2, 0x80000), (0x105A3, 0x00200), (0x105B2, 0x80000),
    (0x105B3, 0x00200), (0x105BA, 0x80000), (0x105BB, 0x00200), (0x105BD, 0x80000), (0x10600, 0x00200), (0x10737, 0x80000),
    (0x10740, 0x00200), (0x10756, 0x80000), (0x10760, 0x00200), (0x10768, 0x80000), (0x10780, 0x00200), (0x10786, 0x80000),
    (0x10787, 0x00200), (0x107B1, 0x80000), (0x107B2, 0x00200), (0x107BB, 0x80000), (0x10800, 0x00200), (0x10806, 0x80000),
    (0x10808, 0x00200), (0x10809, 0x80000), (0x1080A, 0x00200), (0x10836, 0x80000), (0x10837, 0x00200), (0x10839, 0x80000),
    (0x1083C, 0x00200), (0x1083D, 0x80000), (0x1083F, 0x00200), (0x10856, 0x80000), (0x10860, 0x00200), (0x10877, 0x80000),
    (0x10880, 0x00200), (0x1089F, 0x80000), (0x108E0, 0x00200), (0x108F3, 0x80000), (0x108F4, 0x00200), (0x108F6, 0x80000),
    (0x10900, 0x00200), (0x10916, 0x80000), (0x10920, 0x00200), (0x1093A, 0x80000), (0x10980, 0x00200), (0x109B8, 0x80000),
    (0x109BE, 0x00200), (0x109C0, 0x80000), (0x10A00, 0x00200), (0x10A01, 0x00008), (0x10A04, 0x80000), (0x10A05, 0x00008),
    (0x10A07, 0x80000), (0x10A0C, 0x00008), (0x10A10, 0x00200), (0x10A14, 0x80000), (0x10A15, 0x00200), (0x10A18, 0x80000),
    (0x10A19, 0x00200), (0x10A36, 0x80000), (0x10A38, 0x00008), (0x10A3B, 0x80000), (0x10A3F, 0x00008), (0x10A40, 0x80000),
    (0x10A60, 0x00200), (0x10A7D, 0x80000), (0x10A80, 0x00200), (0x10A9D, 0x80000), (0x10AC0, 0x00200), (0x10AC8, 0x80000),
    (0x10AC9, 0x00200), (0x10AE5, 0x00008), (0x10AE7, 0x80000), (0x10B00, 0x00200), (0x10B36, 0x80000), (0x10B40, 0x00200),
    (0x10B56, 0x80000), (0x10B60, 0x00200), (0x10B73, 0x80000), (0x10B80, 0x00200), (0x10B92, 0x80000), (0x10C00, 0x00200),
    (0x10C49, 0x80000), (0x10C80, 0x00200), (0x10CB3, 0x80000), (0x10CC0, 0x00200), (0x10CF3, 0x80000), (0x10D00, 0x00200),
    (0x10D24, 0x00008), (0x10D28, 0x80000), (0x10D30, 0x08000), (0x10D3A, 0x80000), (0x10E80, 0x00200), (0x10EAA, 0x80000),
    (0x10EAB, 0x00008), (0x10EAD, 0x80000), (0x10EB0, 0x00200), (0x10EB2, 0x80000), (0x10EFD, 0x00008), (0x10F00, 0x00200),
    (0x10F1D, 0x80000), (0x10F27, 0x00200), (0x10F28, 0x80000), (0x10F30, 0x00200), (0x10F46, 0x00008), (0x10F51, 0x80000),
    (0x10F70, 0x00200), (0x10F82, 0x00008), (0x10F86, 0x80000), (0x10FB0, 0x00200), (0x10FC5, 0x80000), (0x10FE0, 0x00200),
    (0x10FF7, 0x80000), (0x11000, 0x00008), (0x11003, 0x00200), (0x11038, 0x00008), (0x11047, 0x80000), (0x11066, 0x08000),
    (0x11070, 0x00008), (0x11071, 0x00200), (0x11073, 0x00008), (0x11075, 0x00200), (0x11076, 0x80000), (0x1107F, 0x00008),
    (0x11083, 0x00200), (0x110B0, 0x00008), (0x110BB, 0x80000), (0x110BD, 0x08000), (0x110BE, 0x80000), (0x110C2, 0x00008),
    (0x110C3, 0x80000), (0x110CD, 0x08000), (0x110CE, 0x80000), (0x110D0, 0x00200), (0x110E9, 0x80000), (0x110F0, 0x08000),
    (0x110FA, 0x80000), (0x11100, 0x00008), (0x11103, 0x00200), (0x11127, 0x00008), (0x11135, 0x80000), (0x11136, 0x08000),
    (0x11140, 0x80000), (0x11144, 0x00200), (0x11145, 0x00008), (0x11147, 0x00200), (0x11148, 0x80000), (0x11150, 0x00200),
    (0x11173, 0x00008), (0x11174, 0x80000), (0x11176, 0x00200), (0x11177, 0x80000), (0x11180, 0x00008), (0x11183, 0x00200),
    (0x111B3, 0x00008), (0x111C1, 0x00200), (0x111C5, 0x80000), (0x111C9, 0x00008), (0x111CD, 0x80000), (0x111CE, 0x00008),
    (0x111D0, 0x08000), (0x111DA, 0x00200), (0x111DB, 0x80000), (0x111DC, 0x00200), (0x111DD, 0x80000), (0x11200, 0x00200),
    (0x11212, 0x80000), (0x11213, 0x00200), (0x1122C, 0x00008), (0x11238, 0x80000), (0x1123E, 0x00008), (0x1123F, 0x00200),
    (0x11241, 0x00008), (0x11242, 0x80000), (0x11280, 0x00200), (0x11287, 0x80000), (0x11288, 0x00200), (0x11289, 0x80000),
    (0x1128A, 0x00200), (0x1128E, 0x80000), (0x1128F, 0x00200), (0x1129E, 0x80000), (0x1129F, 0x00200), (0x112A9, 0x80000),
    (0x112B0, 0x00200), (0x112DF, 0x00008), (0x112EB, 0x80000), (0x112F0, 0x08000), (0x112FA, 0x80000), (0x11300, 0x00008),
    (0x11304, 0x80000), (0x11305, 0x00200), (0x1130D, 0x80000), (0x1130F, 0x00200), (0x11311, 0x80000), (0x11313, 0x00200),
    (0x11329, 0x80000), (0x1132A, 0x00200), (0x11331, 0x80000), (0x11332, 0x00200), (0x11334, 0x80000), (0x11335, 0x00200),
    (0x1133A, 0x80000), (0x1133B, 0x00008), (0x1133D, 0x00200), (0x1133E, 0x00008), (0x11345, 0x80000), (0x11347, 0x00008),
    (0x11349, 0x80000), (0x1134B, 0x00008), (0x1134E, 0x80000), (0x11350, 0x00200), (0x11351, 0x80000), (0x11357, 0x00008),
    (0x11358, 0x80000), (0x1135D, 0x00200), (0x11362, 0x00008), (0x11364, 0x80000), (0x11366, 0x00008), (0x1136D, 0x80000),
    (0x11370, 0x00008), (0x11375, 0x80000), (0x11400, 0x00200), (0x11435, 0x00008), (0x11447, 0x00200), (0x1144B, 0x80000),
    (0x11450, 0x08000), (0x1145A, 0x80000), (0x1145E, 0x00008), (0x1145F, 0x00200), (0x11462, 0x80000), (0x11480, 0x00200),
    (0x114B0, 0x00008), (0x114C4, 0x00200), (0x114C6, 0x80000), (0x114C7, 0x00200), (0x114C8, 0x80000), (0x114D0, 0x08000),
    (0x114DA, 0x80000), (0x11580, 0x00200), (0x115AF, 0x00008), (0x115B6, 0x80000), (0x115B8, 0x00008), (0x115C1, 0x80000),
    (0x115D8, 0x00200), (0x115DC, 0x00008), (0x115DE, 0x80000), (0x11600, 0x00200), (0x11630, 0x00008), (0x11641, 0x80000),
    (0x11644, 0x00200), (0x11645, 0x80000), (0x11650, 0x08000), (0x1165A, 0x80000), (0x11680, 0x00200), (0x116AB, 0x00008),
    (0x116B8, 0x00200), (0x116B9, 0x80000), (0x116C0, 0x08000), (0x116CA, 0x80000), (0x1171D, 0x00008), (0x1172C, 0x80000),
    (0x11730, 0x08000), (0x1173A, 0x80000), (0x11800, 0x00200), (0x1182C, 0x00008), (0x1183B, 0x80000), (0x118A0, 0x00200),
    (0x118E0, 0x08000), (0x118EA, 0x80000), (0x118FF, 0x00200), (0x11907, 0x80000), (0x11909, 0x00200), (0x1190A, 0x80000),
    (0x1190C, 0x00200), (0x11914, 0x80000), (0x11915, 0x00200), (0x11917, 0x80000), (0x11918, 0x00200), (0x11930, 0x00008),
    (0x11936, 0x80000), (0x11937, 0x00008), (0x11939, 0x80000), (0x1193B, 0x00008), (0x1193F, 0x00200), (0x11940, 0x00008),
    (0x11941, 0x00200), (0x11942, 0x00008), (0x11944, 0x80000), (0x11950, 0x08000), (0x1195A, 0x80000), (0x119A0, 0x00200),
    (0x119A8, 0x80000), (0x119AA, 0x00200), (0x119D1, 0x00008), (0x119D8, 0x80000), (0x119DA, 0x00008), (0x119E1, 0x00200),
    (0x119E2, 0x80000), (0x119E3, 0x00200), (0x119E4, 0x00008), (0x119E5, 0x80000), (0x11A00, 0x00200), (0x11A01, 0x00008),
    (0x11A0B, 0x00200), (0x11A33, 0x00008), (0x11A3A, 0x00200), (0x11A3B, 0x00008), (0x11A3F, 0x80000), (0x11A47, 0x00008),
    (0x11A48, 0x80000), (0x11A50, 0x00200), (0x11A51, 0x00008), (0x11A5C, 0x00200), (0x11A8A, 0x00008), (0x11A9A, 0x80000),
    (0x11A9D, 0x00200), (0x11A9E, 0x80000), (0x11AB0, 0x00200), (0x11AF9, 0x80000), (0x11C00, 0x00200), (0x11C09, 0x80000),
    (0x11C0A, 0x00200), (0x11C2F, 0x00008), (0x11C37, 0x80000), (0x11C38, 0x00008), (0x11C40, 0x00200), (0x11C41, 0x80000),
    (0x11C50, 0x08000), (0x11C5A, 0x80000), (0x11C72, 0x00200), (0x11C90, 0x80000), (0x11C92, 0x00008), (0x11CA8, 0x80000),
    (0x11CA9, 0x00008), (0x11CB7, 0x80000), (0x11D00, 0x00200), (0x11D07, 0x80000), (0x11D08, 0x00200), (0x11D0A, 0x80000),
    (0x11D0B, 0x00200), (0x11D31, 0x00008), (0x11D37, 0x80000), (0x11D3A, 0x00008), (0x11D3B, 0x80000), (0x11D3C, 0x00008),
    (0x11D3E, 0x80000), (0x11D3F, 0x00008), (0x11D46, 0x00200), (0x11D47, 0x00008), (0x11D48, 0x80000), (0x11D50, 0x08000),
    (0x11D5A, 0x80000), (0x11D60, 0x00200), (0x11D66, 0x80000), (0x11D67, 0x00200), (0x11D69, 0x80000), (0x11D6A, 0x00200),
    (0x11D8A, 0x00008), (0x11D8F, 0x80000), (0x11D90, 0x00008), (0x11D92, 0x80000), (0x11D93, 0x00008), (0x11D98, 0x00200),
    (0x11D99, 0x80000), (0x11DA0, 0x08000), (0x11DAA, 0x80000), (0x11EE0, 0x00200), (0x11EF3, 0x00008), (0x11EF7, 0x80000),
    (0x11F00, 0x00008), (0x11F02, 0x00200), (0x11F03, 0x00008), (0x11F04, 0x00200), (0x11F11, 0x80000), (0x11F12, 0x00200),
    (0x11F34, 0x00008), (0x11F3B, 0x80000), (0x11F3E, 0x00008), (0x11F43, 0x80000), (0x11F50, 0x08000), (0x11F5A, 0x80000),
    (0x11FB0, 0x00200), (0x11FB1, 0x80000), (0x12000, 0x00200), (0x1239A, 0x80000), (0x12400, 0x00200), (0x1246F, 0x80000),
    (0x12480, 0x00200), (0x12544, 0x80000), (0x12F90, 0x00200), (0x12FF1, 0x80000), (0x13000, 0x00200), (0x13430, 0x00040),
    (0x13440, 0x00008), (0x13441, 0x00200), (0x13447, 0x00008), (0x13456, 0x80000), (0x14400, 0x00200), (0x14647, 0x80000),
    (0x16800, 0x00200), (0x16A39, 0x80000), (0x16A40, 0x00200), (0x16A5F, 0x80000), (0x16A60, 0x08000), (0x16A6A, 0x80000),
    (0x16A70, 0x00200), (0x16ABF, 0x80000), (0x16AC0, 0x08000), (0x16ACA, 0x80000), (0x16AD0, 0x00200), (0x16AEE, 0x80000),
    (0x16AF0, 0x00008), (0x16AF5, 0x80000), (0x16B00, 0x00200), (0x16B30, 0x00008), (0x16B37, 0x80000), (0x16B40, 0x00200),
    (0x16B44, 0x80000), (0x16B50, 0x08000), (0x16B5A, 0x80000), (0x16B63, 0x00200), (0x16B78, 0x80000), (0x16B7D, 0x00200),
    (0x16B90, 0x80000), (0x16E40, 0x00200), (0x16E80, 0x80000), (0x16F00, 0x00200), (0x16F4B, 0x80000), (0x16F4F, 0x00008),
    (0x16F50, 0x00200), (0x16F51, 0x00008), (0x16F88, 0x80000), (0x16F8F, 0x00008), (0x16F93, 0x00200), (0x16FA0, 0x80000),
    (0x16FE0, 0x00200), (0x16FE2, 0x80000), (0x16FE3, 0x00200), (0x16FE4, 0x00008), (0x16FE5, 0x80000), (0x16FF0, 0x00008),
    (0x16FF2, 0x80000), (0x1AFF0, 0x00080), (0x1AFF4, 0x80000), (0x1AFF5, 0x00080), (0x1AFFC, 0x80000), (0x1AFFD, 0x00080),
    (0x1AFFF, 0x80000), (0x1B000, 0x00080), (0x1B001, 0x80000), (0x1B120, 0x00080), (0x1B123, 0x80000), (0x1B155, 0x00080),
    (0x1B156, 0x80000), (0x1B164, 0x00080), (0x1B168, 0x80000), (0x1BC00, 0x00200), (0x1BC6B, 0x80000), (0x1BC70, 0x00200),
    (0x1BC7D, 0x80000), (0x1BC80, 0x00200), (0x1BC89, 0x80000), (0x1BC90, 0x00200), (0x1BC9A, 0x80000), (0x1BC9D, 0x00008),
    (0x1BC9F, 0x80000), (0x1BCA0, 0x00040), (0x1BCA4, 0x80000), (0x1CF00, 0x00008), (0x1CF2E, 0x80000), (0x1CF30, 0x00008),
    (0x1CF47, 0x80000), (0x1D165, 0x00008), (0x1D16A, 0x80000), (0x1D16D, 0x00008), (0x1D173, 0x00040), (0x1D17B, 0x00008),
    (0x1D183, 0x80000), (0x1D185, 0x00008), (0x1D18C, 0x80000), (0x1D1AA, 0x00008), (0x1D1AE, 0x80000), (0x1D242, 0x00008),
    (0x1D245, 0x80000), (0x1D400, 0x00200), (0x1D455, 0x80000), (0x1D456, 0x00200), (0x1D49D, 0x80000), (0x1D49E, 0x00200),
    (0x1D4A0, 0x80000), (0x1D4A2, 0x00200), (0x1D4A3, 0x80000), (0x1D4A5, 0x00200), (0x1D4A7, 0x80000), (0x1D4A9, 0x00200),
    (0x1D4AD, 0x80000), (0x1D4AE, 0x00200), (0x1D4BA, 0x80000), (0x1D4BB, 0x00200), (0x1D4BC, 0x80000), (0x1D4BD, 0x00200),
    (0x1D4C4, 0x80000), (0x1D4C5, 0x00200), (0x1D506, 0x80000), (0x1D507, 0x00200), (0x1D50B, 0x80000), (0x1D50D, 0x00200),
    (0x1D515, 0x80000), (0x1D516, 0x00200), (0x1D51D, 0x80000), (0x1D51E, 0x00200), (0x1D53A, 0x80000), (0x1D53B, 0x00200),
    (0x1D53F, 0x80000), (0x1D540, 0x00200), (0x1D545, 0x80000), (0x1D546, 0x00200), (0x1D547, 0x80000), (0x1D54A, 0x00200),
    (0x1D551, 0x80000), (0x1D552, 0x00200), (0x1D6A6, 0x80000), (0x1D6A8, 0x00200), (0x1D6C1, 0x80000), (0x1D6C2, 0x00200),
    (0x1D6DB, 0x80000), (0x1D6DC, 0x00200), (0x1D6FB, 0x80000), (0x1D6FC, 0x00200), (0x1D715, 0x80000), (0x1D716, 0x00200),
    (0x1D735, 0x80000), (0x1D736, 0x00200), (0x1D74F, 0x80000), (0x1D750, 0x00200), (0x1D76F, 0x80000), (0x1D770, 0x00200),
    (0x1D789, 0x80000), (0x1D78A, 0x00200), (0x1D7A9, 0x80000), (0x1D7AA, 0x00200), (0x1D7C3, 0x80000), (0x1D7C4, 0x00200),
    (0x1D7CC, 0x80000), (0x1D7CE, 0x08000), (0x1D800, 0x80000), (0x1DA00, 0x00008), (0x1DA37, 0x80000), (0x1DA3B, 0x00008),
    (0x1DA6D, 0x80000), (0x1DA75, 0x00008), (0x1DA76, 0x80000), (0x1DA84, 0x00008), (0x1DA85, 0x80000), (0x1DA9B, 0x00008),
    (0x1DAA0, 0x80000), (0x1DAA1, 0x00008), (0x1DAB0, 0x80000), (0x1DF00, 0x00200), (0x1DF1F, 0x80000), (0x1DF25, 0x00200),
    (0x1DF2B, 0x80000), (0x1E000, 0x00008), (0x1E007, 0x80000), (0x1E008, 0x00008), (0x1E019, 0x80000), (0x1E01B, 0x00008),
    (0x1E022, 0x80000), (0x1E023, 0x00008), (0x1E025, 0x80000), (0x1E026, 0x00008), (0x1E02B, 0x80000), (0x1E030, 0x00200),
    (0x1E06E, 0x80000), (0x1E08F, 0x00008), (0x1E090, 0x80000), (0x1E100, 0x00200), (0x1E12D, 0x80000), (0x1E130, 0x00008),
    (0x1E137, 0x00200), (0x1E13E, 0x80000), (0x1E140, 0x08000), (0x1E14A, 0x80000), (0x1E14E, 0x00200), (0x1E14F, 0x80000),
    (0x1E290, 0x00200), (0x1E2AE, 0x00008), (0x1E2AF, 0x80000), (0x1E2C0, 0x00200), (0x1E2EC, 0x00008), (0x1E2F0, 0x08000),
    (0x1E2FA, 0x80000), (0x1E4D0, 0x00200), (0x1E4EC, 0x00008), (0x1E4F0, 0x08000), (0x1E4FA, 0x80000), (0x1E7E0, 0x00200),
    (0x1E7E7, 0x80000), (0x1E7E8, 0x00200), (0x1E7EC, 0x80000), (0x1E7ED, 0x00200), (0x1E7EF, 0x80000), (0x1E7F0, 0x00200),
    (0x1E7FF, 0x80000), (0x1E800, 0x00200), (0x1E8C5, 0x80000), (0x1E8D0, 0x00008), (0x1E8D7, 0x80000), (0x1E900, 0x00200),
    (0x1E944, 0x00008), (0x1E94B, 0x00200), (0x1E94C, 0x80000), (0x1E950, 0x08000), (0x1E95A, 0x80000), (0x1EE00, 0x00200),
    (0x1EE04, 0x80000), (0x1EE05, 0x00200), (0x1EE20, 0x80000), (0x1EE21, 0x00200), (0x1EE23, 0x80000), (0x1EE24, 0x00200),
    (0x1EE25, 0x80000), (0x1EE27, 0x00200), (0x1EE28, 0x80000), (0x1EE29, 0x00200), (0x1EE33, 0x80000), (0x1EE34, 0x00200),
    (0x1EE38, 0x80000), (0x1EE39, 0x00200), (0x1EE3A, 0x80000), (0x1EE3B, 0x00200), (0x1EE3C, 0x80000), (0x1EE42, 0x00200),
    (0x1EE43, 0x80000), (0x1EE47, 0x00200), (0x1EE48, 0x80000), (0x1EE49, 0x00200), (0x1EE4A, 0x80000), (0x1EE4B, 0x00200),
    (0x1EE4C, 0x80000), (0x1EE4D, 0x00200), (0x1EE50, 0x80000), (0x1EE51, 0x00200), (0x1EE53, 0x80000), (0x1EE54, 0x00200),
    (0x1EE55, 0x80000), (0x1EE57, 0x00200), (0x1EE58, 0x80000), (0x1EE59, 0x00200), (0x1EE5A, 0x80000), (0x1EE5B, 0x00200),
    (0x1EE5C, 0x80000), (0x1EE5D, 0x00200), (0x1EE5E, 0x80000), (0x1EE5F, 0x00200), (0x1EE60, 0x80000), (0x1EE61, 0x00200),
    (0x1EE63, 0x80000), (0x1EE64, 0x00200), (0x1EE65, 0x80000), (0x1EE67, 0x00200), (0x1EE6B, 0x80000), (0x1EE6C, 0x00200),
    (0x1EE73, 0x80000), (0x1EE74, 0x00200), (0x1EE78, 0x80000), (0x1EE79, 0x00200), (0x1EE7D, 0x80000), (0x1EE7E, 0x00200),
    (0x1EE7F, 0x80000), (0x1EE80, 0x00200), (0x1EE8A, 0x80000), (0x1EE8B, 0x00200), (0x1EE9C, 0x80000), (0x1EEA1, 0x00200),
    (0x1EEA4, 0x80000), (0x1EEA5, 0x00200), (0x1EEAA, 0x80000), (0x1EEAB, 0x00200), (0x1EEBC, 0x80000), (0x1F000, 0x40000),
    (0x1F100, 0x80000), (0x1F10D, 0x40000), (0x1F110, 0x80000), (0x1F12F, 0x40000), (0x1F130, 0x00200), (0x1F14A, 0x80000),
    (0x1F150, 0x00200), (0x1F16A, 0x80000), (0x1F16C, 0x40000), (0x1F170, 0x40200), (0x1F172, 0x00200), (0x1F17E, 0x40200),
    (0x1F180, 0x00200), (0x1F18A, 0x80000), (0x1F18E, 0x40000), (0x1F18F, 0x80000), (0x1F191, 0x40000), (0x1F19B, 0x80000),
    (0x1F1AD, 0x40000), (0x1F1E6, 0x00020), (0x1F200, 0x80000), (0x1F201, 0x40000), (0x1F210, 0x80000), (0x1F21A, 0x40000),
    (0x1F21B, 0x80000), (0x1F22F, 0x40000), (0x1F230, 0x80000), (0x1F232, 0x40000), (0x1F23B, 0x80000), (0x1F23C, 0x40000),
    (0x1F240, 0x80000), (0x1F249, 0x40000), (0x1F3FB, 0x00008), (0x1F400, 0x40000), (0x1F53E, 0x80000), (0x1F546, 0x40000),
    (0x1F650, 0x80000), (0x1F680, 0x40000), (0x1F700, 0x80000), (0x1F774, 0x40000), (0x1F780, 0x80000), (0x1F7D5, 0x40000),
    (0x1F800, 0x80000), (0x1F80C, 0x40000), (0x1F810, 0x80000), (0x1F848, 0x40000), (0x1F850, 0x80000), (0x1F85A, 0x40000),
    (0x1F860, 0x80000), (0x1F888, 0x40000), (0x1F890, 0x80000), (0x1F8AE, 0x40000), (0x1F900, 0x80000), (0x1F90C, 0x40000),
    (0x1F93B, 0x80000), (0x1F93C, 0x40000), (0x1F946, 0x80000), (0x1F947, 0x40000), (0x1FB00, 0x80000), (0x1FBF0, 0x08000),
    (0x1FBFA, 0x80000), (0x1FC00, 0x40000), (0x1FFFE, 0x80000), (0xE0001, 0x00040), (0xE0002, 0x80000), (0xE0020, 0x00008),
    (0xE0080, 0x80000), (0xE0100, 0x00008), (0xE01F0, 0x80000),
];

pub(crate) static WORD_ASCII: [u32; 128] = [
    0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000,
    0x80000, 0x80000, 0x00002, 0x00004, 0x00004, 0x00001, 0x80000, 0x80000,
    0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000,
    0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000,
    0x20000, 0x80000, 0x00800, 0x80000, 0x80000, 0x80000, 0x80000, 0x00400,
    0x80000, 0x80000, 0x80000, 0x80000, 0x04000, 0x80000, 0x01000, 0x80000,
    0x08000, 0x08000, 0x08000, 0x08000, 0x08000, 0x08000, 0x08000, 0x08000,
    0x08000, 0x08000, 0x02000, 0x04000, 0x80000, 0x80000, 0x80000, 0x80000,
    0x80000, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200,
    0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200,
    0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200,
    0x00200, 0x00200, 0x00200, 0x80000, 0x80000, 0x80000, 0x80000, 0x10000,
    0x80000, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200,
    0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200,
    0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200,
    0x00200, 0x00200, 0x00200, 0x80000, 0x80000, 0x80000, 0x80000, 0x80000,
];

/// Sentence_Break
pub(crate) static SENTENCE_RANGES: &[(u32, u32)] = &[
    (0x0000, 0x04000), (0x0009, 0x00020), (0x000A, 0x00002), (0x000B, 0x00020), (0x000D, 0x00001), (0x000E, 0x04000),
    (0x0020, 0x00020), (0x0021, 0x01000), (0x0022, 0x02000), (0x0023, 0x04000), (0x0027, 0x02000), (0x002A, 0x04000),
    (0x002C, 0x00800), (0x002E, 0x00400), (0x002F, 0x04000), (0x0030, 0x00200), (0x003A, 0x00800), (0x003B, 0x04000),
    (0x003F, 0x01000), (0x0040, 0x04000), (0x0041, 0x00080), (0x005B, 0x02000), (0x005C, 0x04000), (0x005D, 0x02000),
    (0x005E, 0x04000), (0x0061, 0x00040), (0x007B, 0x02000), (0x007C, 0x04000), (0x007D, 0x02000), (0x007E, 0x04000),
    (0x0085, 0x00008), (0x0086, 0x04000), (0x00A0, 0x00020), (0x00A1, 0x04000), (0x00AA, 0x00040), (0x00AB, 0x02000),
    (0x00AC, 0x04000), (0x00AD, 0x00010), (0x00AE, 0x04000), (0x00B5, 0x00040), (0x00B6, 0x04000), (0x00BA, 0x00040),
    (0x00BB, 0x02000), (0x00BC, 0x04000), (0x00C0, 0x00080), (0x00D7, 0x04000), (0x00D8, 0x00080), (0x00DF, 0x00040),
    (0x00F7, 0x04000), (0x00F8, 0x00040), (0x0100, 0x00080), (0x0101, 0x00040), (0x0102, 0x00080), (0x0103, 0x00040),
    (0x0104, 0x00080), (0x0105, 0x00040), (0x0106, 0x00080), (0x0107, 0x00040), (0x0108, 0x00080), (0x0109, 0x00040),
    (0x010A, 0x00080), (0x010B, 0x00040), (0x010C, 0x00080), (0x010D, 0x00040), (0x010E, 0x00080), (0x010F, 0x00040),
    (0x0110, 0x00080), (0x0111, 0x00040), (0x0112, 0x00080), (0x0113, 0x00040), (0x0114, 0x00080), (0x0115, 0x00040),
    (0x0116, 0x00080), (0x0117, 0x00040), (0x0118, 0x00080), (0x0119, 0x00040), (0x011A, 0x00080), (0x011B, 0x00040),
    (0x011C, 0x00080), (0x011D, 0x00040), (0x011E, 0x00080), (0x011F, 0x00040), (0x0120, 0x00080), (0x0121, 0x00040),
    (0x0122, 0x00080), (0x0123, 0x00040), (0x0124, 0x00080), (0x0125, 0x00040), (0x0126, 0x00080), (0x0127, 0x00040),
    (0x0128, 0x00080), (0x0129, 0x00040), (0x012A, 0x00080), (0x012B, 0x00040), (0x012C, 0x00080), (0x012D, 0x00040),
    (0x012E, 0x00080), (0x012F, 0x00040), (0x0130, 0x00080), (0x0131, 0x00040), (0x0132, 0x00080), (0x0133, 0x00040),
    (0x0134, 0x00080), (0x0135, 0x00040), (0x0136, 0x00080), (0x0137, 0x00040), (0x0139, 0x00080), (0x013A, 0x00040),
    (0x013B, 0x00080), (0x013C, 0x00040), (0x013D, 0x00080), (0x013E, 0x00040), (0x013F, 0x00080), (0x0140, 0x00040),
    (0x0141, 0x00080), (0x0142, 0x00040), (0x0143, 0x00080), (0x0144, 0x00040), (0x0145, 0x00080), (0x0146, 0x00040),
    (0x0147, 0x00080), (0x0148, 0x00040), (0x014A, 0x00080), (0x014B, 0x00040), (0x014C, 0x00080), (0x014D, 0x00040),
    (0x014E, 0x00080), (0x014F, 0x00040), (0x0150, 0x00080), (0x0151, 0x00040), (0x0152, 0x00080), (0x0153, 0x00040),
    (0x0154, 0x00080), (0x0155, 0x00040), (0x0156, 0x00080), (0x0157, 0x00040), (0x0158, 0x00080), (0x0159, 0x00040),
    (0x015A, 0x00080), (0x015B, 0x00040), (0x015C, 0x00080), (0x015D, 0x00040), (0x015E, 0x00080), (0x015F, 0x00040),
    (0x0160, 0x00080), (0x0161, 0x00040), (0x0162, 0x00080), (0x0163, 0x00040), (0x0164, 0x00080), (0x0165, 0x00040),
    (0x0166, 0x00080), (0x0167, 0x00040), (0x0168, 0x00080), (0x0169, 0x00040), (0x016A, 0x00080), (0x016B, 0x00040),
    (0x016C, 0x00080), (0x016D, 0x00040), (0x016E, 0x00080), (0x016F, 0x00040), (0x0170, 0x00080), (0x0171, 0x00040),
    (0x0172, 0x00080), (0x0173, 0x00040), (0x0174, 0x00080), (0x0175, 0x00040), (0x0176, 0x00080), (0x0177, 0x00040),
    (0x0178, 0x00080), (0x017A, 0x00040), (0x017B, 0x00080), (0x017C, 0x00040), (0x017D, 0x00080), (0x017E, 0x00040),
    (0x0181, 0x00080), (0x0183, 0x00040), (0x0184, 0x00080), (0x0185, 0x00040), (0x0186, 0x00080), (0x0188, 0x00040),
    (0x0189, 0x00080), (0x018C, 0x00040), (0x018E, 0x00080), (0x0192, 0x00040), (0x0193, 0x00080), (0x0195, 0x00040),
    (0x0196, 0x00080), (0x0199, 0x00040), (0x019C, 0x00080), (0x019E, 0x00040), (0x019F, 0x00080), (0x01A1, 0x00040),
    (0x01A2, 0x00080), (0x01A3, 0x00040), (0x01A4, 0x00080), (0x01A5, 0x00040), (0x01A6, 0x00080), (0x01A8, 0x00040),
    (0x01A9, 0x00080), (0x01AA, 0x00040), (0x01AC, 0x00080), (0x01AD, 0x00040), (0x01AE, 0x00080), (0x01B0, 0x00040),
    (0x01B1, 0x00080), (0x01B4, 0x00040), (0x01B5, 0x00080), (0x01B6, 0x00040), (0x01B7, 0x00080), (0x01B9, 0x00040),
    (0x01BB, 0x00100), (0x01BC, 0x00080), (0x01BD, 0x00040), (0x01C0, 0x00100), (0x01C4, 0x00080), (0x01C6, 0x00040),
    (0x01C7, 0x00080), (0x01C9, 0x00040), (0x01CA, 0x00080), (0x01CC, 0x00040), (0x01CD, 0x00080), (0x01CE, 0x00040),
    (0x01CF, 0x00080), (0x01D0, 0x00040), (0x01D1, 0x00080), (0x01D2, 0x00040), (0x01D3, 0x00080), (0x01D4, 0x00040),
    (0x01D5, 0x00080), (0x01D6, 0x00040), (0x01D7, 0x00080), (0x01D8, 0x00040), (0x01D9, 0x00080), (0x01DA, 0x00040),
    (0x01DB, 0x00080), (0x01DC, 0x00040), (0x01DE, 0x00080), (0x01DF, 0x00040), (0x01E0, 0x00080), (0x01E1, 0x00040),
    (0x01E2, 0x00080), (0x01E3, 0x00040), (0x01E4, 0x00080), (0x01E5, 0x00040), (0x01E6, 0x00080), (0x01E7, 0x00040),
    (0x01E8, 0x00080), (0x01E9, 0x00040), (0x01EA, 0x00080), (0x01EB, 0x00040), (0x01EC, 0x00080), (0x01ED, 0x00040),
    (0x01EE, 0x00080), (0x01EF, 0x00040), (0x01F1, 0x00080), (0x01F3, 0x00040), (0x01F4, 0x00080), (0x01F5, 0x00040),
    (0x01F6, 0x00080), (0x01F9, 0x00040), (0x01FA, 0x00080), (0x01FB, 0x00040), (0x01FC, 0x00080), (0x01FD, 0x00040),
    (0x01FE, 0x00080), (0x01FF, 0x00040), (0x0200, 0x00080), (0x0201, 0x00040), (0x0202, 0x00080), (0x0203, 0x00040),
    (0x0204, 0x00080), (0x0205, 0x00040), (0x0206, 0x00080), (0x0207, 0x00040), (0x0208, 0x00080), (0x0209, 0x00040),
    (0x020A, 0x00080), (0x020B, 0x00040), (0x020C, 0x00080), (0x020D, 0x00040), (0x020E, 0x00080), (0x020F, 0x00040),
    (0x0210, 0x00080), (0x0211, 0x00040), (0x0212, 0x00080), (0x0213, 0x00040), (0x0214, 0x00080), (0x0215, 0x00040),
    (0x0216, 0x00080), (0x0217, 0x00040), (0x0218, 0x00080), (0x0219, 0x00040), (0x021A, 0x00080), (0x021B, 0x00040),
    (0x021C, 0x00080), (0x021D, 0x00040), (0x021E, 0x00080), (0x021F, 0x00040), (0x0220, 0x00080), (0x0221, 0x00040),
    (0x0222, 0x00080), (0x0223, 0x00040), (0x0224, 0x00080), (0x0225, 0x00040), (0x0226, 0x00080), (0x0227, 0x00040),
    (0x0228, 0x00080), (0x0229, 0x00040), (0x022A, 0x00080), (0x022B, 0x00040), (0x022C, 0x00080), (0x022D, 0x00040),
    (0x022E, 0x00080), (0x022F, 0x00040), (0x0230, 0x00080), (0x0231, 0x00040), (0x0232, 0x00080), (0x0233, 0x00040),
    (0x023A, 0x00080), (0x023C, 0x00040), (0x023D, 0x00080), (0x023F, 0x00040), (0x0241, 0x00080), (0x0242, 0x00040),
    (0x0243, 0x00080), (0x0247, 0x00040), (0x0248, 0x00080), (0x0249, 0x00040), (0x024A, 0x00080), (0x024B, 0x00040),
    (0x024C, 0x00080), (0x024D, 0x00040), (0x024E, 0x00080), (0x024F, 0x00040), (0x0294, 0x00100), (0x0295, 0x00040),
    (0x02B9, 0x00100), (0x02C0, 0x00040), (0x02C2, 0x04000), (0x02C6, 0x00100), (0x02D2, 0x04000), (0x02E0, 0x00040),
    (0x02E5, 0x04000), (0x02EC, 0x00100), (0x02ED, 0x04000), (0x02EE, 0x00100), (0x02EF, 0x04000), (0x0300, 0x00004),
    (0x0370, 0x00080), (0x0371, 0x00040), (0x0372, 0x00080), (0x0373, 0x00040), (0x0374, 0x00100), (0x0375, 0x04000),
    (0x0376, 0x00080), (0x0377, 0x00040), (0x0378, 0x04000), (0x037A, 0x00040), (0x037E, 0x04000), (0x037F, 0x00080),
    (0x0380, 0x04000), (0x0386, 0x00080), (0x0387, 0x04000), (0x0388, 0x00080), (0x038B, 0x04000), (0x038C, 0x00080),
    (0x038D, 0x04000), (0x038E, 0x00080), (0x0390, 0x00040), (0x0391, 0x00080), (0x03A2, 0x04000), (0x03A3, 0x00080),
    (0x03AC, 0x00040), (0x03CF, 0x00080), (0x03D0, 0x00040), (0x03D2, 0x00080), (0x03D5, 0x00040), (0x03D8, 0x00080),
    (0x03D9, 0x00040), (0x03DA, 0x00080), (0x03DB, 0x00040), (0x03DC, 0x00080), (0x03DD, 0x00040), (0x03DE, 0x00080),
    (0x03DF, 0x00040), (0x03E0, 0x00080), (0x03E1, 0x00040), (0x03E2, 0x00080), (0x03E3, 0x00040), (0x03E4, 0x00080),
    (0x03E5, 0x00040), (0x03E6, 0x00080), (0x03E7, 0x00040), (0x03E8, 0x00080), (0x03E9, 0x00040), (0x03EA, 0x00080),
    (0x03EB, 0x00040), (0x03EC, 0x00080), (0x03ED, 0x00040), (0x03EE, 0x00080), (0x03EF, 0x00040), (0x03F4, 0x00080),
    (0x03F5, 0x00040), (0x03F6, 0x04000), (0x03F7, 0x00080), (0x03F8, 0x00040), (0x03F9, 0x00080), (0x03FB, 0x00040),
    (0x03FD, 0x00080), (0x0430, 0x00040), (0x0460, 0x00080), (0x0461, 0x00040), (0x0462, 0x00080), (0x0463, 0x00040),
    (0x0464, 0x00080), (0x0465, 0x00040), (0x0466, 0x00080), (0x0467, 0x00040), (0x0468, 0x00080), (0x0469, 0x00040),
    (0x046A, 0x00080), (0x046B, 0x00040), (0x046C, 0x00080), (0x046D, 0x00040), (0x046E, 0x00080), (0x046F, 0x00040),
    (0x0470, 0x00080), (0x0471, 0x00040), (0x0472, 0x00080), (0x0473, 0x00040), (0x0474, 0x00080), (0x0475, 0x00040),
    (0x0476, 0x00080), (0x0477, 0x00040), (0x0478, 0x00080), (0x0479, 0x00040), (0x047A, 0x00080), (0x047B, 0x00040),
    (0x047C, 0x00080), (0x047D, 0x00040), (0x047E, 0x00080), (0x047F, 0x00040), (0x0480, 0x00080), (0x0481, 0x00040),
    (0x0482, 0x04000), (0x0483, 0x00004), (0x048A, 0x00080), (0x048B, 0x00040), (0x048C, 0x00080), (0x048D, 0x00040),
    (0x048E, 0x00080), (0x048F, 0x00040), (0x0490, 0x00080), (0x0491, 0x00040), (0x0492, 0x00080), (0x0493, 0x00040),
    (0x0494, 0x00080), (0x0495, 0x00040), (0x0496, 0x00080), (0x0497, 0x00040), (0x0498, 0x00080), (0x0499, 0x00040),
    (0x049A, 0x00080), (0x049B, 0x00040), (0x049C, 0x00080), (0x049D, 0x00040), (0x049E, 0x00080), (0x049F, 0x00040),
    (0x04A0, 0x00080), (0x04A1, 0x00040), (0x04A2, 0x00080), (0x04A3, 0x00040), (0x04A4, 0x00080), (0x04A5, 0x00040),
    (0x04A6, 0x00080), (0x04A7, 0x00040), (0x04A8, 0x00080), (0x04A9, 0x00040), (0x04AA, 0x00080), (0x04AB, 0x00040),
    (0x04AC, 0x00080), (0x04AD, 0x00040), (0x04AE, 0x00080), (0x04AF, 0x00040), (0x04B0, 0x00080), (0x04B1, 0x00040),
    (0x04B2, 0x00080), (0x04B3, 0x00040), (0x04B4, 0x00080), (0x04B5, 0x00040), (0x04B6, 0x00080), (0x04B7, 0x00040),
    (0x04B8, 0x00080), (0x04B9, 0x00040), (0x04BA, 0x00080), (0x04BB, 0x00040), (0x04BC, 0x00080), (0x04BD, 0x00040),
    (0x04BE, 0x00080), (0x04BF, 0x00040), (0x04C0, 0x00080), (0x04C2, 0x00040), (0x04C3, 0x00080), (0x04C4, 0x00040),
    (0x04C5, 0x00080), (0x04C6, 0x00040), (0x04C7, 0x00080), (0x04C8, 0x00040), (0x04C9, 0x00080), (0x04CA, 0x00040),
    (0x04CB, 0x00080), (0x04CC, 0x00040), (0x04CD, 0x00080), (0x04CE, 0x00040), (0x04D0, 0x00080), (0x04D1, 0x00040),
    (0x04D2, 0x00080), (0x04D3, 0x00040), (0x04D4, 0x00080), (0x04D5, 0x00040), (0x04D6, 0x00080), (0x04D7, 0x00040),
    (0x04D8, 0x00080), (0x04D9, 0x00040), (0x04DA, 0x00080), (0x04DB, 0x00040), (0x04DC, 0x00080), (0x04DD, 0x00040),
    (0x04DE, 0x00080), (0x04DF, 0x00040), (0x04E0, 0x00080), (0x04E1, 0x00040), (0x04E2, 0x00080), (0x04E3, 0x00040),
    (0x04E4, 0x00080), (0x04E5, 0x00040), (0x04E6, 0x00080), (0x04E7, 0x00040), (0x04E8, 0x00080), (0x04E9, 0x00040),
    (0x04EA, 0x00080), (0x04EB, 0x00040), (0x04EC, 0x00080), (0x04ED, 0x00040), (0x04EE, 0x00080), (0x04EF, 0x00040),
    (0x04F0, 0x00080), (0x04F1, 0x00040), (0x04F2, 0x00080), (0x04F3, 0x00040), (0x04F4, 0x00080), (0x04F5, 0x00040),
    (0x04F6, 0x00080), (0x04F7, 0x00040), (0x04F8, 0x00080), (0x04F9, 0x00040), (0x04FA, 0x00080), (0x04FB, 0x00040),
    (0x04FC, 0x00080), (0x04FD, 0x00040), (0x04FE, 0x00080), (0x04FF, 0x00040), (0x0500, 0x00080), (0x0501, 0x00040),
    (0x0502, 0x00080), (0x0503, 0x00040), (0x0504, 0x00080), (0x0505, 0x00040), (0x0506, 0x00080), (0x0507, 0x00040),
    (0x0508, 0x00080), (0x0509, 0x00040), (0x050A, 0x00080), (0x050B, 0x00040), (0x050C, 0x00080), (0x050D, 0x00040),
    (0x050E, 0x00080), (0x050F, 0x00040), (0x0510, 0x00080), (0x0511, 0x00040), (0x0512, 0x00080), (0x0513, 0x00040),
    (0x0514, 0x00080), (0x0515, 0x00040), (0x0516, 0x00080), (0x0517, 0x00040), (0x0518, 0x00080), (0x0519, 0x00040),
    (0x051A, 0x00080), (0x051B, 0x00040), (0x051C, 0x00080), (0x051D, 0x00040), (0x051E, 0x00080), (0x051F, 0x00040),
    (0x0520, 0x00080), (0x0521, 0x00040), (0x0522, 0x00080), (0x0523, 0x00040), (0x0524, 0x00080), (0x0525, 0x00040),
    (0x0526, 0x00080), (0x0527, 0x00040), (0x0528, 0x00080), (0x0529, 0x00040), (0x052A, 0x00080), (0x052B, 0x00040),
    (0x052C, 0x00080), (0x052D, 0x00040), (0x052E, 0x00080), (0x052F, 0x00040), (0x0530, 0x04000), (0x0531, 0x00080),
    (0x0557, 0x04000), (0x0559, 0x00100), (0x055A, 0x04000), (0x055D, 0x00800), (0x055E, 0x04000), (0x0560, 0x00040),
    (0x0589, 0x01000), (0x058A, 0x04000), (0x0591, 0x00004), (0x05BE, 0x04000), (0x05BF, 0x00004), (0x05C0, 0x04000),
    (0x05C1, 0x00004), (0x05C3, 0x04000), (0x05C4, 0x00004), (0x05C6, 0x04000), (0x05C7, 0x00004), (0x05C8, 0x04000),
    (0x05D0, 0x00100), (0x05EB, 0x04000), (0x05EF, 0x00100), (0x05F4, 0x04000), (0x0600, 0x00200), (0x0606, 0x04000),
    (0x060C, 0x00800), (0x060E, 0x04000), (0x0610, 0x00004), (0x061B, 0x04000), (0x061C, 0x00010), (0x061D, 0x01000),
    (0x0620, 0x00100), (0x064B, 0x00004), (0x0660, 0x00200), (0x066A, 0x04000), (0x066B, 0x00200), (0x066D, 0x04000),
    (0x066E, 0x00100), (0x0670, 0x00004), (0x0671, 0x00100), (0x06D4, 0x01000), (0x06D5, 0x00100), (0x06D6, 0x00004),
    (0x06DD, 0x00200), (0x06DE, 0x04000), (0x06DF, 0x00004), (0x06E5, 0x00100), (0x06E7, 0x00004), (0x06E9, 0x04000),
    (0x06EA, 0x00004), (0x06EE, 0x00100), (0x06F0, 0x00200), (0x06FA, 0x00100), (0x06FD, 0x04000), (0x06FF, 0x00100),
    (0x0700, 0x01000), (0x0703, 0x04000), (0x070F, 0x00010), (0x0710, 0x00100), (0x0711, 0x00004), (0x0712, 0x00100),
    (0x0730, 0x00004), (0x074B, 0x04000), (0x074D, 0x00100), (0x07A6, 0x00004), (0x07B1, 0x00100), (0x07B2, 0x04000),
    (0x07C0, 0x00200), (0x07CA, 0x00100), (0x07EB, 0x00004), (0x07F4, 0x00100), (0x07F6, 0x04000), (0x07F8, 0x00800),
    (0x07F9, 0x01000), (0x07FA, 0x00100), (0x07FB, 0x04000), (0x07FD, 0x00004), (0x07FE, 0x04000), (0x0800, 0x00100),
    (0x0816, 0x00004), (0x081A, 0x00100), (0x081B, 0x00004), (0x0824, 0x00100), (0x0825, 0x00004), (0x0828, 0x00100),
    (0x0829, 0x00004), (0x082E, 0x04000), (0x0837, 0x01000), (0x0838, 0x04000), (0x0839, 0x01000), (0x083A, 0x04000),
    (0x083D, 0x01000), (0x083F, 0x04000), (0x0840, 0x00100), (0x0859, 0x00004), (0x085C, 0x04000), (0x0860, 0x00100),
    (0x086B, 0x04000), (0x0870, 0x00100), (0x0888, 0x04000), (0x0889, 0x00100), (0x088F, 0x04000), (0x0890, 0x00200),
    (0x0892, 0x04000), (0x0898, 0x00004), (0x08A0, 0x00100), (0x08CA, 0x00004), (0x08E2, 0x00200), (0x08E3, 0x00004),
    (0x0904, 0x00100), (0x093A, 0x00004), (0x093D, 0x00100), (0x093E, 0x00004), (0x0950, 0x00100), (0x0951, 0x00004),
    (0x0958, 0x00100), (0x0962, 0x00004), (0x0964, 0x01000), (0x0966, 0x00200), (0x0970, 0x04000), (0x0971, 0x00100),
    (0x0981, 0x00004), (0x0984, 0x04000), (0x0985, 0x00100), (0x098D, 0x04000), (0x098F, 0x00100), (0x0991, 0x04000),
    (0x0993, 0x00100), (0x09A9, 0x04000), (0x09AA, 0x00100), (0x09B1, 0x04000), (0x09B2, 0x00100), (0x09B3, 0x04000),
    (0x09B6, 0x00100), (0x09BA, 0x04000), (0x09BC, 0x00004), (0x09BD, 0x00100), (0x09BE, 0x00004), (0x09C5, 0x04000),
    (0x09C7, 0x00004), (0x09C9, 0x04000), (0x09CB, 0x00004), (0x09CE, 0x00100), (0x09CF, 0x04000), (0x09D7, 0x00004),
    (0x09D8, 0x04000), (0x09DC, 0x00100), (0x09DE, 0x04000), (0x09DF, 0x00100), (0x09E2, 0x00004), (0x09E4, 0x04000),
    (0x09E6, 0x00200), (0x09F0, 0x00100), (0x09F2, 0x04000), (0x09FC, 0x00100), (0x09FD, 0x04000), (0x09FE, 0x00004),
    (0x09FF, 0x04000), (0x0A01, 0x00004), (0x0A04, 0x04000), (0x0A05, 0x00100), (0x0A0B, 0x04000), (0x0A0F, 0x00100),
    (0x0A11, 0x04000), (0x0A13, 0x00100), (0x0A29, 0x04000), (0x0A2A, 0x00100), (0x0A31, 0x04000), (0x0A32, 0x00100),
    (0x0A34, 0x04000), (0x0A35, 0x00100), (0x0A37, 0x04000), (0x0A38, 0x00100), (0x0A3A, 0x04000), (0x0A3C, 0x00004),
    (0x0A3D, 0x04000), (0x0A3E, 0x00004), (0x0A43, 0x04000), (0x0A47, 0x00004), (0x0A49, 0x04000), (0x0A4B, 0x00004),
    (0x0A4E, 0x04000), (0x0A51, 0x00004), (0x0A52, 0x04000), (0x0A59, 0x00100), (0x0A5D, 0x04000), (0x0A5E, 0x00100),
    (0x0A5F, 0x04000), (0x0A66, 0x00200), (0x0A70, 0x00004), (0x0A72, 0x00100), (0x0A75, 0x00004), (0x0A76, 0x04000),
    (0x0A81, 0x00004), (0x0A84, 0x04000), (0x0A85, 0x00100), (0x0A8E, 0x04000), (0x0A8F, 0x00100), (0x0A92, 0x04000),
    (0x0A93, 0x00100), (0x0AA9, 0x04000), (0x0AAA, 0x00100), (0x0AB1, 0x04000), (0x0AB2, 0x00100), (0x0AB4, 0x04000),
    (0x0AB5, 0x00100), (0x0ABA, 0x04000), (0x0ABC, 0x00004), (0x0ABD, 0x00100), (0x0ABE, 0x00004), (0x0AC6, 0x04000),
    (0x0AC7, 0x00004), (0x0ACA, 0x04000), (0x0ACB, 0x00004), (0x0ACE, 0x04000), (0x0AD0, 0x00100), (0x0AD1, 0x04000),
    (0x0AE0, 0x00100), (0x0AE2, 0x00004), (0x0AE4, 0x04000), (0x0AE6, 0x00200), (0x0AF0, 0x04000), (0x0AF9, 0x00100),
    (0x0AFA, 0x00004), (0x0B00, 0x04000), (0x0B01, 0x00004), (0x0B04, 0x04000), (0x0B05, 0x00100), (0x0B0D, 0x04000),
    (0x0B0F, 0x00100), (0x0B11, 0x04000), (0x0B13, 0x00100), (0x0B29, 0x04000), (0x0B2A, 0x00100), (0x0B31, 0x04000),
    (0x0B32, 0x00100), (0x0B34, 0x04000), (0x0B35, 0x00100), (0x0B3A, 0x04000), (0x0B3C, 0x00004), (0x0B3D, 0x00100),
    (0x0B3E, 0x00004), (0x0B45, 0x04000), (0x0B47, 0x00004), (0x0B49, 0x04000), (0x0B4B, 0x00004), (0x0B4E, 0x04000),
    (0x0B55, 0x00004), (0x0B58, 0x04000), (0x0B5C, 0x00100), (0x0B5E, 0x04000), (0x0B5F, 0x00100), (0x0B62, 0x00004),
    (0x0B64, 0x04000), (0x0B66, 0x00200), (0x0B70, 0x04000), (0x0B71, 0x00100), (0x0B72, 0x04000), (0x0B82, 0x00004),
    (0x0B83, 0x00100), (0x0B84, 0x04000), (0x0B85, 0x00100), (0x0B8B, 0x04000), (0x0B8E, 0x00100), (0x0B91, 0x04000),
    (0x0B92, 0x00100), (0x0B96, 0x04000), (0x0B99, 0x00100), (0x0B9B, 0x04000), (0x0B9C, 0x00100), (0x0B9D, 0x04000),
    (0x0B9E, 0x00100), (0x0BA0, 0x04000), (0x0BA3, 0x00100), (0x0BA5, 0x04000), (0x0BA8, 0x00100), (0x0BAB, 0x04000),
    (0x0BAE, 0x00100), (0x0BBA, 0x04000), (0x0BBE, 0x00004), (0x0BC3, 0x04000), (0x0BC6, 0x00004), (0x0BC9, 0x04000),
    (0x0BCA, 0x00004), (0x0BCE, 0x04000), (0x0BD0, 0x00100), (0x0BD1, 0x04000), (0x0BD7, 0x00004), (0x0BD8, 0x04000),
    (0x0BE6, 0x00200), (0x0BF0, 0x04000), (0x0C00, 0x00004), (0x0C05, 0x00100), (0x0C0D, 0x04000), (0x0C0E, 0x00100),
    (0x0C11, 0x04000), (0x0C12, 0x00100), (0x0C29, 0x04000), (0x0C2A, 0x00100), (0x0C3A, 0x04000), (0x0C3C, 0x00004),
    (0x0C3D, 0x00100), (0x0C3E, 0x00004), (0x0C45, 0x04000), (0x0C46, 0x00004), (0x0C49, 0x04000), (0x0C4A, 0x00004),
    (0x0C4E, 0x04000), (0x0C55, 0x00004), (0x0C57, 0x04000), (0x0C58, 0x00100), (0x0C5B, 0x04000), (0x0C5D, 0x00100),
    (0x0C5E, 0x04000), (0x0C60, 0x00100), (0x0C62, 0x00004), (0x0C64, 0x04000), (0x0C66, 0x00200), (0x0C70, 0x04000),
    (0x0C80, 0x00100), (0x0C81, 0x00004), (0x0C84, 0x04000), (0x0C85, 0x00100), (0x0C8D, 0x04000), (0x0C8E, 0x00100),
    (0x0C91, 0x04000), (0x0C92, 0x00100), (0x0CA9, 0x04000), (0x0CAA, 0x00100), (0x0CB4, 0x04000), (0x0CB5, 0x00100),
    (0x0CBA, 0x04000), (0x0CBC, 0x00004), (0x0CBD, 0x00100), (0x0CBE, 0x00004), (0x0CC5, 0x04000), (0x0CC6, 0x00004),
    (0x0CC9, 0x04000), (0x0CCA, 0x00004), (0x0CCE, 0x04000), (0x0CD5, 0x00004), (0x0CD7, 0x04000), (0x0CDD, 0x00100),
    (0x0CDF, 0x04000), (0x0CE0, 0x00100), (0x0CE2, 0x00004), (0x0CE4, 0x04000), (0x0CE6, 0x00200), (0x0CF0, 0x04000),
    (0x0CF1, 0x00100), (0x0CF3, 0x00004), (0x0CF4, 0x04000), (0x0D00, 0x00004), (0x0D04, 0x00100), (0x0D0D, 0x04000),
    (0x0D0E, 0x00100), (0x0D11, 0x04000), (0x0D12, 0x00100), (0x0D3B, 0x00004), (0x0D3D, 0x00100), (0x0D3E, 0x00004),
    (0x0D45, 0x04000), (0x0D46, 0x00004), (0x0D49, 0x04000), (0x0D4A, 0x00004), (0x0D4E, 0x00100), (0x0D4F, 0x04000),
    (0x0D54, 0x00100), (0x0D57, 0x00004), (0x0D58, 0x04000), (0x0D5F, 0x00100), (0x0D62, 0x00004), (0x0D64, 0x04000),
    (0x0D66, 0x00200), (0x0D70, 0x04000), (0x0D7A, 0x00100), (0x0D80, 0x04000), (0x0D81, 0x00004), (0x0D84, 0x04000),
    (0x0D85, 0x00100), (0x0D97, 0x04000), (0x0D9A, 0x00100), (0x0DB2, 0x04000), (0x0DB3, 0x00100), (0x0DBC, 0x04000),
    (0x0DBD, 0x00100), (0x0DBE, 0x04000), (0x0DC0, 0x00100), (0x0DC7, 0x04000), (0x0DCA, 0x00004), (0x0DCB, 0x04000),
    (0x0DCF, 0x00004), (0x0DD5, 0x04000), (0x0DD6, 0x00004), (0x0DD7, 0x04000), (0x0DD8, 0x00004), (0x0DE0, 0x04000),
    (0x0DE6, 0x00200), (0x0DF0, 0x04000), (0x0DF2, 0x00004), (0x0DF4, 0x04000), (0x0E01, 0x00100), (0x0E31, 0x00004),
    (0x0E32, 0x00100), (0x0E34, 0x00004), (0x0E3B, 0x04000), (0x0E40, 0x00100), (0x0E47, 0x00004), (0x0E4F, 0x04000),
    (0x0E50, 0x00200), (0x0E5A, 0x04000), (0x0E81, 0x00100), (0x0E83, 0x04000), (0x0E84, 0x00100), (0x0E85, 0x04000),
    (0x0E86, 0x00100), (0x0E8B, 0x04000), (0x0E8C, 0x00100), (0x0EA4, 0x04000), (0x0EA5, 0x00100), (0x0EA6, 0x04000),
    (0x0EA7, 0x00100), (0x0EB1, 0x00004), (0x0EB2, 0x00100), (0x0EB4, 0x00004), (0x0EBD, 0x00100), (0x0EBE, 0x04000),
    (0x0EC0, 0x00100), (0x0EC5, 0x04000), (0x0EC6, 0x00100), (0x0EC7, 0x04000), (0x0EC8, 0x00004), (0x0ECF, 0x04000),
    (0x0ED0, 0x00200), (0x0EDA, 0x04000), (0x0EDC, 0x00100), (0x0EE0, 0x04000), (0x0F00, 0x00100), (0x0F01, 0x04000),
    (0x0F18, 0x00004), (0x0F1A, 0x04000), (0x0F20, 0x00200), (0x0F2A, 0x04000), (0x0F35, 0x00004), (0x0F36, 0x04000),
    (0x0F37, 0x00004), (0x0F38, 0x04000), (0x0F39, 0x00004), (0x0F3A, 0x02000), (0x0F3E, 0x00004), (0x0F40, 0x00100),
    (0x0F48, 0x04000), (0x0F49, 0x00100), (0x0F6D, 0x04000), (0x0F71, 0x00004), (0x0F85, 0x04000), (0x0F86, 0x00004),
    (0x0F88, 0x00100), (0x0F8D, 0x00004), (0x0F98, 0x04000), (0x0F99, 0x00004), (0x0FBD, 0x04000), (0x0FC6, 0x00004),
    (0x0FC7, 0x04000), (0x1000, 0x00100), (0x102B, 0x00004), (0x103F, 0x00100), (0x1040, 0x00200), (0x104A, 0x01000),
    (0x104C, 0x04000), (0x1050, 0x00100), (0x1056, 0x00004), (0x105A, 0x00100), (0x105E, 0x00004), (0x1061, 0x00100),
    (0x1062, 0x00004), (0x1065, 0x00100), (0x1067, 0x00004), (0x106E, 0x00100), (0x1071, 0x00004), (0x1075, 0x00100),
    (0x1082, 0x00004), (0x108E, 0x00100), (0x108F, 0x00004), (0x1090, 0x00200), (0x109A, 0x00004), (0x109E, 0x04000),
    (0x10A0, 0x00080), (0x10C6, 0x04000), (0x10C7, 0x00080), (0x10C8, 0x04000), (0x10CD, 0x00080), (0x10CE, 0x04000),
    (0x10D0, 0x00100), (0x10FB, 0x04000), (0x10FC, 0x00100), (0x1249, 0x04000), (0x124A, 0x00100), (0x124E, 0x04000),
    (0x1250, 0x00100), (0x1257, 0x04000), (0x1258, 0x00100), (0x1259, 0x04000), (0x125A, 0x00100), (0x125E, 0x04000),
    (0x1260, 0x00100), (0x1289, 0x04000), (0x128A, 0x00100), (0x128E, 0x04000), (0x1290, 0x00100), (0x12B1, 0x04000),
    (0x12B2, 0x00100), (0x12B6, 0x04000), (0x12B8, 0x00100), (0x12BF, 0x04000), (0x12C0, 0x00100), (0x12C1, 0x04000),
    (0x12C2, 0x00100), (0x12C6, 0x04000), (0x12C8, 0x00100), (0x12D7, 0x04000), (0x12D8, 0x00100), (0x1311, 0x04000),
    (0x1312, 0x00100), (0x1316, 0x04000), (0x1318, 0x00100), (0x135B, 0x04000), (0x135D, 0x00004), (0x1360, 0x04000),
    (0x1362, 0x01000), (0x1363, 0x04000), (0x1367, 0x01000), (0x1369, 0x04000), (0x1380, 0x00100), (0x1390, 0x04000),
    (0x13A0, 0x00080), (0x13F6, 0x04000), (0x13F8, 0x00040), (0x13FE, 0x04000), (0x1401, 0x00100), (0x166D, 0x04000),
    (0x166E, 0x01000), (0x166F, 0x00100), (0x1680, 0x00020), (0x1681, 0x00100), (0x169B, 0x02000), (0x169D, 0x04000),
    (0x16A0, 0x00100), (0x16EB, 0x04000), (0x16EE, 0x00100), (0x16F9, 0x04000), (0x1700, 0x00100), (0x1712, 0x00004),
    (0x1716, 0x04000), (0x171F, 0x00100), (0x1732, 0x00004), (0x1735, 0x01000), (0x1737, 0x04000), (0x1740, 0x00100),
    (0x1752, 0x00004), (0x1754, 0x04000), (0x1760, 0x00100), (0x176D, 0x04000), (0x176E, 0x00100), (0x1771, 0x04000),
    (0x1772, 0x00004), (0x1774, 0x04000), (0x1780, 0x00100), (0x17B4, 0x00004), (0x17D4, 0x04000), (0x17D7, 0x00100),
    (0x17D8, 0x04000), (0x17DC, 0x00100), (0x17DD, 0x00004), (0x17DE, 0x04000), (0x17E0, 0x00200), (0x17EA, 0x04000),
    (0x1802, 0x00800), (0x1803, 0x01000), (0x1804, 0x04000), (0x1808, 0x00800), (0x1809, 0x01000), (0x180A, 0x04000),
    (0x180B, 0x00004), (0x180E, 0x00010), (0x180F, 0x00004), (0x1810, 0x00200), (0x181A, 0x04000), (0x1820, 0x00100),
    (0x1879, 0x04000), (0x1880, 0x00100), (0x1885, 0x00004), (0x1887, 0x00100), (0x18A9, 0x00004), (0x18AA, 0x00100),
    (0x18AB, 0x04000), (0x18B0, 0x00100), (0x18F6, 0x04000), (0x1900, 0x00100), (0x191F, 0x04000), (0x1920, 0x00004),
    (0x192C, 0x04000), (0x1930, 0x00004), (0x193C, 0x04000), (0x1944, 0x01000), (0x1946, 0x00200), (0x1950, 0x00100),
    (0x196E, 0x04000), (0x1970, 0x00100), (0x1975, 0x04000), (0x1980, 0x00100), (0x19AC, 0x04000), (0x19B0, 0x00100),
    (0x19CA, 0x04000), (0x19D0, 0x00200), (0x19DA, 0x04000), (0x1A00, 0x00100), (0x1A17, 0x00004), (0x1A1C, 0x04000),
    (0x1A20, 0x00100), (0x1A55, 0x00004), (0x1A5F, 0x04000), (0x1A60, 0x00004), (0x1A7D, 0x04000), (0x1A7F, 0x00004),
    (0x1A80, 0x00200), (0x1A8A, 0x04000), (0x1A90, 0x00200), (0x1A9A, 0x04000), (0x1AA7, 0x00100), (0x1AA8, 0x01000),
    (0x1AAC, 0x04000), (0x1AB0, 0x00004), (0x1ACF, 0x04000), (0x1B00, 0x00004), (0x1B05, 0x00100), (0x1B34, 0x00004),
    (0x1B45, 0x00100), (0x1B4D, 0x04000), (0x1B50, 0x00200), (0x1B5A, 0x01000), (0x1B5C, 0x04000), (0x1B5E, 0x01000),
    (0x1B60, 0x04000), (0x1B6B, 0x00004), (0x1B74, 0x04000), (0x1B7D, 0x01000), (0x1B7F, 0x04000), (0x1B80, 0x00004),
    (0x1B83, 0x00100), (0x1BA1, 0x00004), (0x1BAE, 0x00100), (0x1BB0, 0x00200), (0x1BBA, 0x00100), (0x1BE6, 0x00004),
    (0x1BF4, 0x04000), (0x1C00, 0x00100), (0x1C24, 0x00004), (0x1C38, 0x04000), (0x1C3B, 0x01000), (0x1C3D, 0x04000),
    (0x1C40, 0x00200), (0x1C4A, 0x04000), (0x1C4D, 0x00100), (0x1C50, 0x00200), (0x1C5A, 0x00100), (0x1C7E, 0x01000),
    (0x1C80, 0x00040), (0x1C89, 0x04000), (0x1C90, 0x00100), (0x1CBB, 0x04000), (0x1CBD, 0x00100), (0x1CC0, 0x04000),
    (0x1CD0, 0x00004), (0x1CD3, 0x04000), (0x1CD4, 0x00004), (0x1CE9, 0x00100), (0x1CED, 0x00004), (0x1CEE, 0x00100),
    (0x1CF4, 0x00004), (0x1CF5, 0x00100), (0x1CF7, 0x00004), (0x1CFA, 0x00100), (0x1CFB, 0x04000), (0x1D00, 0x00040),
    (0x1DC0, 0x00004), (0x1E00, 0x00080), (0x1E01, 0x00040), (0x1E02, 0x00080), (0x1E03, 0x00040), (0x1E04, 0x00080),
    (0x1E05, 0x00040), (0x1E06, 0x00080), (0x1E07, 0x00040), (0x1E08, 0x00080), (0x1E09, 0x00040), (0x1E0A, 0x00080),
    (0x1E0B, 0x00040), (0x1E0C, 0x00080), (0x1E0D, 0x00040), (0x1E0E, 0x00080), (0x1E0F, 0x00040), (0x1E10, 0x00080),
    (0x1E11, 0x00040), (0x1E12, 0x00080), (0x1E13, 0x00040), (0x1E14, 0x00080), (0x1E15, 0x00040), (0x1E16, 0x00080),
    (0x1E17, 0x00040), (0x1E18, 0x00080), (0x1E19, 0x00040), (0x1E1A, 0x00080), (0x1E1B, 0x00040), (0x1E1C, 0x00080),
    (0x1E1D, 0x00040), (0x1E1E, 0x00080), (0x1E1F, 0x00040), (0x1E20, 0x00080), (0x1E21, 0x00040), (0x1E22, 0x00080),
    (0x1E23, 0x00040), (0x1E24, 0x00080), (0x1E25, 0x00040), (0x1E26, 0x00080), (0x1E27, 0x00040), (0x1E28, 0x00080),
    (0x1E29, 0x00040), (0x1E2A, 0x00080), (0x1E2B, 0x00040), (0x1E2C, 0x00080), (0x1E2D, 0x00040), (0x1E2E, 0x00080),
    (0x1E2F, 0x00040), (0x1E30, 0x00080), (0x1E31, 0x00040), (0x1E32, 0x00080), (0x1E33, 0x00040), (0x1E34, 0x00080),
    (0x1E35, 0x00040), (0x1E36, 0x00080), (0x1E37, 0x00040), (0x1E38, 0x00080), (0x1E39, 0x00040), (0x1E3A, 0x00080),
    (0x1E3B, 0x00040), (0x1E3C, 0x00080), (0x1E3D, 0x00040), (0x1E3E, 0x00080), (0x1E3F, 0x00040), (0x1E40, 0x00080),
    (0x1E41, 0x00040), (0x1E42, 0x00080), (0x1E43, 0x00040), (0x1E44, 0x00080), (0x1E45, 0x00040), (0x1E46, 0x00080),
    (0x1E47, 0x00040), (0x1E48, 0x00080), (0x1E49, 0x00040), (0x1E4A, 0x00080), (0x1E4B, 0x00040), (0x1E4C, 0x00080),
    (0x1E4D, 0x00040), (0x1E4E, 0x00080), (0x1E4F, 0x00040), (0x1E50, 0x00080), (0x1E51, 0x00040), (0x1E52, 0x00080),
    (0x1E53, 0x00040), (0x1E54, 0x00080), (0x1E55, 0x00040), (0x1E56, 0x00080), (0x1E57, 0x00040), (0x1E58, 0x00080),
    (0x1E59, 0x00040), (0x1E5A, 0x00080), (0x1E5B, 0x00040), (0x1E5C, 0x00080), (0x1E5D, 0x00040), (0x1E5E, 0x00080),
    (0x1E5F, 0x00040), (0x1E60, 0x00080), (0x1E61, 0x00040), (0x1E62, 0x00080), (0x1E63, 0x00040), (0x1E64, 0x00080),
    (0x1E65, 0x00040), (0x1E66, 0x00080), (0x1E67, 0x00040), (0x1E68, 0x00080), (0x1E69, 0x00040), (0x1E6A, 0x00080),
    (0x1E6B, 0x00040), (0x1E6C, 0x00080), (0x1E6D, 0x00040), (0x1E6E, 0x00080), (0x1E6F, 0x00040), (0x1E70, 0x00080),
    (0x1E71, 0x00040), (0x1E72, 0x00080), (0x1E73, 0x00040), (0x1E74, 0x00080), (0x1E75, 0x00040), (0x1E76, 0x00080),
    (0x1E77, 0x00040), (0x1E78, 0x00080), (0x1E79, 0x00040), (0x1E7A, 0x00080), (0x1E7B, 0x00040), (0x1E7C, 0x00080),
    (0x1E7D, 0x00040), (0x1E7E, 0x00080), (0x1E7F, 0x00040), (0x1E80, 0x00080), (0x1E81, 0x00040), (0x1E82, 0x00080),
    (0x1E83, 0x00040), (0x1E84, 0x00080), (0x1E85, 0x00040), (0x1E86, 0x00080), (0x1E87, 0x00040), (0x1E88, 0x00080),
    (0x1E89, 0x00040), (0x1E8A, 0x00080), (0x1E8B, 0x00040), (0x1E8C, 0x00080), (0x1E8D, 0x00040), (0x1E8E, 0x00080),
    (0x1E8F, 0x00040), (0x1E90, 0x00080), (0x1E91, 0x00040), (0x1E92, 0x00080), (0x1E93, 0x00040), (0x1E94, 0x00080),
    (0x1E95, 0x00040), (0x1E9E, 0x00080), (0x1E9F, 0x00040), (0x1EA0, 0x00080), (0x1EA1, 0x00040), (0x1EA2, 0x00080),
    (0x1EA3, 0x00040), (0x1EA4, 0x00080), (0x1EA5, 0x00040), (0x1EA6, 0x00080), (0x1EA7, 0x00040), (0x1EA8, 0x00080),
    (0x1EA9, 0x00040), (0x1EAA, 0x00080), (0x1EAB, 0x00040), (0x1EAC, 0x00080), (0x1EAD, 0x00040), (0x1EAE, 0x00080),
    (0x1EAF, 0x00040), (0x1EB0, 0x00080), (0x1EB1, 0x00040), (0x1EB2, 0x00080), (0x1EB3, 0x00040), (0x1EB4, 0x00080),
    (0x1EB5, 0x00040), (0x1EB6, 0x00080), (0x1EB7, 0x00040), (0x1EB8, 0x00080), (0x1EB9, 0x00040), (0x1EBA, 0x00080),
    (0x1EBB, 0x00040), (0x1EBC, 0x00080), (0x1EBD, 0x00040), (0x1EBE, 0x00080), (0x1EBF, 0x00040), (0x1EC0, 0x00080),
    (0x1EC1, 0x00040), (0x1EC2, 0x00080), (0x1EC3, 0x00040), (0x1EC4, 0x00080), (0x1EC5, 0x00040), (0x1EC6, 0x00080),
    (0x1EC7, 0x00040), (0x1EC8, 0x00080), (0x1EC9, 0x00040), (0x1ECA, 0x00080), (0x1ECB, 0x00040), (0x1ECC, 0x00080),
    (0x1ECD, 0x00040), (0x1ECE, 0x00080), (0x1ECF, 0x00040), (0x1ED0, 0x00080), (0x1ED1, 0x00040), (0x1ED2, 0x00080),
    (0x1ED3, 0x00040), (0x1ED4, 0x00080), (0x1ED5, 0x00040), (0x1ED6, 0x00080), (0x1ED7, 0x00040), (0x1ED8, 0x00080),
    (0x1ED9, 0x00040), (0x1EDA, 0x00080), (0x1EDB, 0x00040), (0x1EDC, 0x00080), (0x1EDD, 0x00040), (0x1EDE, 0x00080),
    (0x1EDF, 0x00040), (0x1EE0, 0x00080), (0x1EE1, 0x00040), (0x1EE2, 0x00080), (0x1EE3, 0x00040), (0x1EE4, 0x00080),
    (0x1EE5, 0x00040), (0x1EE6, 0x00080), (0x1EE7, 0x00040), (0x1EE8, 0x00080), (0x1EE9, 0x00040), (0x1EEA, 0x00080),
    (0x1EEB, 0x00040), (0x1EEC, 0x00080), (0x1EED, 0x00040), (0x1EEE, 0x00080), (0x1EEF, 0x00040), (0x1EF0, 0x00080),
    (0x1EF1, 0x00040), (0x1EF2, 0x00080), (0x1EF3, 0x00040), (0x1EF4, 0x00080), (0x1EF5, 0x00040), (0x1EF6, 0x00080),
    (0x1EF7, 0x00040), (0x1EF8, 0x00080), (0x1EF9, 0x00040), (0x1EFA, 0x00080), (0x1EFB, 0x00040), (0x1EFC, 0x00080),
    (0x1EFD, 0x00040), (0x1EFE, 0x00080), (0x1EFF, 0x00040), (0x1F08, 0x00080), (0x1F10, 0x00040), (0x1F16, 0x04000),
    (0x1F18, 0x00080), (0x1F1E, 0x04000), (0x1F20, 0x00040), (0x1F28, 0x00080), (0x1F30, 0x00040), (0x1F38, 0x00080),
    (0x1F40, 0x00040), (0x1F46, 0x04000), (0x1F48, 0x00080), (0x1F4E, 0x04000), (0x1F50, 0x00040), (0x1F58, 0x04000),
    (0x1F59, 0x00080), (0x1F5A, 0x04000), (0x1F5B, 0x00080), (0x1F5C, 0x04000), (0x1F5D, 0x00080), (0x1F5E, 0x04000),
    (0x1F5F, 0x00080), (0x1F60, 0x00040), (0x1F68, 0x00080), (0x1F70, 0x00040), (0x1F7E, 0x04000), (0x1F80, 0x00040),
    (0x1F88, 0x00080), (0x1F90, 0x00040), (0x1F98, 0x00080), (0x1FA0, 0x00040), (0x1FA8, 0x00080), (0x1FB0, 0x00040),
    (0x1FB5, 0x04000), (0x1FB6, 0x00040), (0x1FB8, 0x00080), (0x1FBD, 0x04000), (0x1FBE, 0x00040), (0x1FBF, 0x04000),
    (0x1FC2, 0x00040), (0x1FC5, 0x04000), (0x1FC6, 0x00040), (0x1FC8, 0x00080), (0x1FCD, 0x04000), (0x1FD0, 0x00040),
    (0x1FD4, 0x04000), (0x1FD6, 0x00040), (0x1FD8, 0x00080), (0x1FDC, 0x04000), (0x1FE0, 0x00040), (0x1FE8, 0x00080),
    (0x1FED, 0x04000), (0x1FF2, 0x00040), (0x1FF5, 0x04000), (0x1FF6, 0x00040), (0x1FF8, 0x00080), (0x1FFD, 0x04000),
    (0x2000, 0x00020), (0x200B, 0x00010), (0x200C, 0x00004), (0x200E, 0x00010), (0x2010, 0x04000), (0x2013, 0x00800),
    (0x2015, 0x04000), (0x2018, 0x02000), (0x2020, 0x04000), (0x2024, 0x00400), (0x2025, 0x04000), (0x2028, 0x00008),
    (0x202A, 0x00010), (0x202F, 0x00020), (0x2030, 0x04000), (0x2039, 0x02000), (0x203B, 0x04000), (0x203C, 0x01000),
    (0x203E, 0x04000), (0x2045, 0x02000), (0x2047, 0x01000), (0x204A, 0x04000), (0x205F, 0x00020), (0x2060, 0x00010),
    (0x2065, 0x04000), (0x2066, 0x00010), (0x2070, 0x04000), (0x2071, 0x00040), (0x2072, 0x04000), (0x207D, 0x02000),
    (0x207F, 0x00040), (0x2080, 0x04000), (0x208D, 0x02000), (0x208F, 0x04000), (0x2090, 0x00040), (0x209D, 0x04000),
    (0x20D0, 0x00004), (0x20F1, 0x04000), (0x2102, 0x00080), (0x2103, 0x04000), (0x2107, 0x00080), (0x2108, 0x04000),
    (0x210A, 0x00040), (0x210B, 0x00080), (0x210E, 0x00040), (0x2110, 0x00080), (0x2113, 0x00040), (0x2114, 0x04000),
    (0x2115, 0x00080), (0x2116, 0x04000), (0x2119, 0x00080), (0x211E, 0x04000), (0x2124, 0x00080), (0x2125, 0x04000),
    (0x2126, 0x00080), (0x2127, 0x04000), (0x2128, 0x00080), (0x2129, 0x04000), (0x212A, 0x00080), (0x212E, 0x04000),
    (0x212F, 0x00040), (0x2130, 0x00080), (0x2134, 0x00040), (0x2135, 0x00100), (0x2139, 0x00040), (0x213A, 0x04000),
    (0x213C, 0x00040), (0x213E, 0x00080), (0x2140, 0x04000), (0x2145, 0x00080), (0x2146, 0x00040), (0x214A, 0x04000),
    (0x214E, 0x00040), (0x214F, 0x04000), (0x2160, 0x00080), (0x2170, 0x00040), (0x2180, 0x00100), (0x2183, 0x00080),
    (0x2184, 0x00040), (0x2185, 0x00100), (0x2189, 0x04000), (0x2308, 0x02000), (0x230C, 0x04000), (0x2329, 0x02000),
    (0x232B, 0x04000), (0x24B6, 0x00080), (0x24D0, 0x00040), (0x24EA, 0x04000), (0x275B, 0x02000), (0x2761, 0x04000),
    (0x2768, 0x02000), (0x2776, 0x04000), (0x27C5, 0x02000), (0x27C7, 0x04000), (0x27E6, 0x02000), (0x27F0, 0x04000),
    (0x2983, 0x02000), (0x2999, 0x04000), (0x29D8, 0x02000), (0x29DC, 0x04000), (0x29FC, 0x02000), (0x29FE, 0x04000),
    (0x2C00, 0x00080), (0x2C30, 0x00040), (0x2C60, 0x00080), (0x2C61, 0x00040), (0x2C62, 0x00080), (0x2C65, 0x00040),
    (0x2C67, 0x00080), (0x2C68, 0x00040), (0x2C69, 0x00080), (0x2C6A, 0x00040), (0x2C6B, 0x00080), (0x2C6C, 0x00040),
    (0x2C6D, 0x00080), (0x2C71, 0x00040), (0x2C72, 0x00080), (0x2C73, 0x00040), (0x2C75, 0x00080), (0x2C76, 0x00040),
    (0x2C7E, 0x00080), (0x2C81, 0x00040), (0x2C82, 0x00080), (0x2C83, 0x00040), (0x2C84, 0x00080), (0x2C85, 0x00040),
    (0x2C86, 0x00080), (0x2C87, 0x00040), (0x2C88, 0x00080), (0x2C89, 0x00040), (0x2C8A, 0x00080), (0x2C8B, 0x00040),
    (0x2C8C, 0x00080), (0x2C8D, 0x00040), (0x2C8E, 0x00080), (0x2C8F, 0x00040), (0x2C90, 0x00080), (0x2C91, 0x00040),
    (0x2C92, 0x00080), (0x2C93, 0x00040), (0x2C94, 0x00080), (0x2C95, 0x00040), (0x2C96, 0x00080), (0x2C97, 0x00040),
    (0x2C98, 0x00080), (0x2C99, 0x00040), (0x2C9A, 0x00080), (0x2C9B, 0x00040), (0x2C9C, 0x00080), (0x2C9D, 0x00040),
    (0x2C9E, 0x00080), (0x2C9F, 0x00040), (0x2CA0, 0x00080), (0x2CA1, 0x00040), (0x2CA2, 0x00080), (0x2CA3, 0x00040),
    (0x2CA4, 0x00080), (0x2CA5, 0x00040), (0x2CA6, 0x00080), (0x2CA7, 0x00040), (0x2CA8, 0x00080), (0x2CA9, 0x00040),
    (0x2CAA, 0x00080), (0x2CAB, 0x00040), (0x2CAC, 0x00080), (0x2CAD, 0x00040), (0x2CAE, 0x00080), (0x2CAF, 0x00040),
    (0x2CB0, 0x00080), (0x2CB1, 0x00040), (0x2CB2, 0x00080), (0x2CB3, 0x00040), (0x2CB4, 0x00080), (0x2CB5, 0x00040),
    (0x2CB6, 0x00080), (0x2CB7, 0x00040), (0x2CB8, 0x00080), (0x2CB9, 0x00040), (0x2CBA, 0x00080), (0x2CBB, 0x00040),
    (0x2CBC, 0x00080), (0x2CBD, 0x00040), (0x2CBE, 0x00080), (0x2CBF, 0x00040), (0x2CC0, 0x00080), (0x2CC1, 0x00040),
    (0x2CC2, 0x00080), (0x2CC3, 0x00040), (0x2CC4, 0x00080), (0x2CC5, 0x00040), (0x2CC6, 0x00080), (0x2CC7, 0x00040),
    (0x2CC8, 0x00080), (0x2CC9, 0x00040), (0x2CCA, 0x00080), (0x2CCB, 0x00040), (0x2CCC, 0x00080), (0x2CCD, 0x00040),
    (0x2CCE, 0x00080), (0x2CCF, 0x00040), (0x2CD0, 0x00080), (0x2CD1, 0x00040), (0x2CD2, 0x00080), (0x2CD3, 0x00040),
    (0x2CD4, 0x00080), (0x2CD5, 0x00040), (0x2CD6, 0x00080), (0x2CD7, 0x00040), (0x2CD8, 0x00080), (0x2CD9, 0x00040),
    (0x2CDA, 0x00080), (0x2CDB, 0x00040), (0x2CDC, 0x00080), (0x2CDD, 0x00040), (0x2CDE, 0x00080), (0x2CDF, 0x00040),
    (0x2CE0, 0x00080), (0x2CE1, 0x00040), (0x2CE2, 0x00080), (0x2CE3, 0x00040), (0x2CE5, 0x04000), (0x2CEB, 0x00080),
    (0x2CEC, 0x00040), (0x2CED, 0x00080), (0x2CEE, 0x00040), (0x2CEF, 0x00004), (0x2CF2, 0x00080), (0x2CF3, 0x00040),
    (0x2CF4, 0x04000), (0x2D00, 0x00040), (0x2D26, 0x04000), (0x2D27, 0x00040), (0x2D28, 0x04000), (0x2D2D, 0x00040),
    (0x2D2E, 0x04000), (0x2D30, 0x00100), (0x2D68, 0x04000), (0x2D6F, 0x00100), (0x2D70, 0x04000), (0x2D7F, 0x00004),
    (0x2D80, 0x00100), (0x2D97, 0x04000), (0x2DA0, 0x00100), (0x2DA7, 0x04000), (0x2DA8, 0x00100), (0x2DAF, 0x04000),
    (0x2DB0, 0x00100), (0x2DB7, 0x04000), (0x2DB8, 0x00100), (0x2DBF, 0x04000), (0x2DC0, 0x00100), (0x2DC7, 0x04000),
    (0x2DC8, 0x00100), (0x2DCF, 0x04000), (0x2DD0, 0x00100), (0x2DD7, 0x04000), (0x2DD8, 0x00100), (0x2DDF, 0x04000),
    (0x2DE0, 0x00004), (0x2E00, 0x02000), (0x2E0E, 0x04000), (0x2E1C, 0x02000), (0x2E1E, 0x04000), (0x2E20, 0x02000),
    (0x2E2A, 0x04000), (0x2E2E, 0x01000), (0x2E2F, 0x00100), (0x2E30, 0x04000), (0x2E3C, 0x01000), (0x2E3D, 0x04000),
    (0x2E42, 0x02000), (0x2E43, 0x04000), (0x2E53, 0x01000), (0x2E55, 0x02000), (0x2E5D, 0x04000), (0x3000, 0x00020),
    (0x3001, 0x00800), (0x3002, 0x01000), (0x3003, 0x04000), (0x3005, 0x00100), (0x3008, 0x02000), (0x3012, 0x04000),
    (0x3014, 0x02000), (0x301C, 0x04000), (0x301D, 0x02000), (0x3020, 0x04000), (0x3021, 0x00100), (0x302A, 0x00004),
    (0x3030, 0x04000), (0x3031, 0x00100), (0x3036, 0x04000), (0x3038, 0x00100), (0x303D, 0x04000), (0x3041, 0x00100),
    (0x3097, 0x04000), (0x3099, 0x00004), (0x309B, 0x04000), (0x309D, 0x00100), (0x30A0, 0x04000), (0x30A1, 0x00100),
    (0x30FB, 0x04000), (0x30FC, 0x00100), (0x3100, 0x04000), (0x3105, 0x00100), (0x3130, 0x04000), (0x3131, 0x00100),
    (0x318F, 0x04000), (0x31A0, 0x00100), (0x31C0, 0x04000), (0x31F0, 0x00100), (0x3200, 0x04000), (0x3400, 0x00100),
    (0x4DC0, 0x04000), (0x4E00, 0x00100), (0xA48D, 0x04000), (0xA4D0, 0x00100), (0xA4FE, 0x04000), (0xA4FF, 0x01000),
    (0xA500, 0x00100), (0xA60D, 0x04000), (0xA60E, 0x01000), (0xA610, 0x00100), (0xA620, 0x00200), (0xA62A, 0x00100),
    (0xA62C, 0x04000), (0xA640, 0x00080), (0xA641, 0x00040), (0xA642, 0x00080), (0xA643, 0x00040), (0xA644, 0x00080),
    (0xA645, 0x00040), (0xA646, 0x00080), (0xA647, 0x00040), (0xA648, 0x00080), (0xA649, 0x00040), (0xA64A, 0x00080),
    (0xA64B, 0x00040), (0xA64C, 0x00080), (0xA64D, 0x00040), (0xA64E, 0x00080), (0xA64F, 0x00040), (0xA650, 0x00080),
    (0xA651, 0x00040), (0xA652, 0x00080), (0xA653, 0x00040), (0xA654, 0x00080), (0xA655, 0x00040), (0xA656, 0x00080),
    (0xA657, 0x00040), (0xA658, 0x00080), (0xA659, 0x00040), (0xA65A, 0x00080), (0xA65B, 0x00040), (0xA65C, 0x00080),
    (0xA65D, 0x00040), (0xA65E, 0x00080), (0xA65F, 0x00040), (0xA660, 0x00080), (0xA661, 0x00040), (0xA662, 0x00080),
    (0xA663, 0x00040), (0xA664, 0x00080), (0xA665, 0x00040), (0xA666, 0x00080), (0xA667, 0x00040), (0xA668, 0x00080),
    (0xA669, 0x00040), (0xA66A, 0x00080), (0xA66B, 0x00040), (0xA66C, 0x00080), (0xA66D, 0x00040), (0xA66E, 0x00100),
    (0xA66F, 0x00004), (0xA673, 0x04000), (0xA674, 0x00004), (0xA67E, 0x04000), (0xA67F, 0x00100), (0xA680, 0x00080),
    (0xA681, 0x00040), (0xA682, 0x00080), (0xA683, 0x00040), (0xA684, 0x00080), (0xA685, 0x00040), (0xA686, 0x00080),
    (0xA687, 0x00040), (0xA688, 0x00080), (0xA689, 0x00040), (0xA68A, 0x00080), (0xA68B, 0x00040), (0xA68C, 0x00080),
    (0xA68D, 0x00040), (0xA68E, 0x00080), (0xA68F, 0x00040), (0xA690, 0x00080), (0xA691, 0x00040), (0xA692, 0x00080),
    (0xA693, 0x00040), (0xA694, 0x00080), (0xA695, 0x00040), (0xA696, 0x00080), (0xA697, 0x00040), (0xA698, 0x00080),
    (0xA699, 0x00040), (0xA69A, 0x00080), (0xA69B, 0x00040), (0xA69E, 0x00004), (0xA6A0, 0x00100), (0xA6F0, 0x00004),
    (0xA6F2, 0x04000), (0xA6F3, 0x01000), (0xA6F4, 0x04000), (0xA6F7, 0x01000), (0xA6F8, 0x04000), (0xA717, 0x00100),
    (0xA720, 0x04000), (0xA722, 0x00080), (0xA723, 0x00040), (0xA724, 0x00080), (0xA725, 0x00040), (0xA726, 0x00080),
    (0xA727, 0x00040), (0xA728, 0x00080), (0xA729, 0x00040), (0xA72A, 0x00080), (0xA72B, 0x00040), (0xA72C, 0x00080),
    (0xA72D, 0x00040), (0xA72E, 0x00080), (0xA72F, 0x00040), (0xA732, 0x00080), (0xA733, 0x00040), (0xA734, 0x00080),
    (0xA735, 0x00040), (0xA736, 0x00080), (0xA737, 0x00040), (0xA738, 0x00080), (0xA739, 0x00040), (0xA73A, 0x00080),
    (0xA73B, 0x00040), (0xA73C, 0x00080), (0xA73D, 0x00040), (0xA73E, 0x00080), (0xA73F, 0x00040), (0xA740, 0x00080),
    (0xA741, 0x00040), (0xA742, 0x00080), (0xA743, 0x00040), (0xA744, 0x00080), (0xA745, 0x00040), (0xA746, 0x00080),
    (0xA747, 0x00040), (0xA748, 0x00080), (0xA749, 0x00040), (0xA74A, 0x00080), (0xA74B, 0x00040), (0xA74C, 0x00080),
    (0xA74D, 0x00040), (0xA74E, 0x00080), (0xA74F, 0x00040), (0xA750, 0x00080), (0xA751, 0x00040), (0xA752, 0x00080),
    (0xA753, 0x00040), (0xA754, 0x00080), (0xA755, 0x00040), (0xA756, 0x00080), (0xA757, 0x00040), (0xA758, 0x00080),
    (0xA759, 0x00040), (0xA75A, 0x00080), (0xA75B, 0x00040), (0xA75C, 0x00080), (0xA75D, 0x00040), (0xA75E, 0x00080),
    (0xA75F, 0x00040), (0xA760, 0x00080), (0xA761, 0x00040), (0xA762, 0x00080), (0xA763, 0x00040), (0xA764, 0x00080),
    (0xA765, 0x00040), (0xA766, 0x00080), (0xA767, 0x00040), (0xA768, 0x00080), (0xA769, 0x00040), (0xA76A, 0x00080),
    (0xA76B, 0x00040), (0xA76C, 0x00080), (0xA76D, 0x00040), (0xA76E, 0x00080), (0xA76F, 0x00040), (0xA779, 0x00080),
    (0xA77A, 0x00040), (0xA77B, 0x00080), (0xA77C, 0x00040), (0xA77D, 0x00080), (0xA77F, 0x00040), (0xA780, 0x00080),
    (0xA781, 0x00040), (0xA782, 0x00080), (0xA783, 0x00040), (0xA784, 0x00080), (0xA785, 0x00040), (0xA786, 0x00080),
    (0xA787, 0x00040), (0xA788, 0x00100), (0xA789, 0x04000), (0xA78B, 0x00080), (0xA78C, 0x00040), (0xA78D, 0x00080),
    (0xA78E, 0x00040), (0xA78F, 0x00100), (0xA790, 0x00080), (0xA791, 0x00040), (0xA792, 0x00080), (0xA793, 0x00040),
    (0xA796, 0x00080), (0xA797, 0x00040), (0xA798, 0x00080), (0xA799, 0x00040), (0xA79A, 0x00080), (0xA79B, 0x00040),
    (0xA79C, 0x00080), (0xA79D, 0x00040), (0xA79E, 0x00080), (0xA79F, 0x00040), (0xA7A0, 0x00080), (0xA7A1, 0x00040),
    (0xA7A2, 0x00080), (0xA7A3, 0x00040), (0xA7A4, 0x00080), (0xA7A5, 0x00040), (0xA7A6, 0x00080), (0xA7A7, 0x00040),
    (0xA7A8, 0x00080), (0xA7A9, 0x00040), (0xA7AA, 0x00080), (0xA7AF, 0x00040), (0xA7B0, 0x00080), (0xA7B5, 0x00040),
    (0xA7B6, 0x00080), (0xA7B7, 0x00040), (0xA7B8, 0x00080), (0xA7B9, 0x00040), (0xA7BA, 0x00080), (0xA7BB, 0x00040),
    (0xA7BC, 0x00080), (0xA7BD, 0x00040), (0xA7BE, 0x00080), (0xA7BF, 0x00040), (0xA7C0, 0x00080), (0xA7C1, 0x00040),
    (0xA7C2, 0x00080), (0xA7C3, 0x00040), (0xA7C4, 0x00080), (0xA7C8, 0x00040), (0xA7C9, 0x00080), (0xA7CA, 0x00040),
    (0xA7CB, 0x04000), (0xA7D0, 0x00080), (0xA7D1, 0x00040), (0xA7D2, 0x04000), (0xA7D3, 0x00040), (0xA7D4, 0x04000),
    (0xA7D5, 0x00040), (0xA7D6, 0x00080), (0xA7D7, 0x00040), (0xA7D8, 0x00080), (0xA7D9, 0x00040), (0xA7DA, 0x04000),
    (0xA7F2, 0x00100), (0xA7F5, 0x00080), (0xA7F6, 0x00040), (0xA7F7, 0x00100), (0xA7F8, 0x00040), (0xA7FB, 0x00100),
    (0xA802, 0x00004), (0xA803, 0x00100), (0xA806, 0x00004), (0xA807, 0x00100), (0xA80B, 0x00004), (0xA80C, 0x00100),
    (0xA823, 0x00004), (0xA828, 0x04000), (0xA82C, 0x00004), (0xA82D, 0x04000), (0xA840, 0x00100), (0xA874, 0x04000),
    (0xA876, 0x01000), (0xA878, 0x04000), (0xA880, 0x00004), (0xA882, 0x00100), (0xA8B4, 0x00004), (0xA8C6, 0x04000),
    (0xA8CE, 0x01000), (0xA8D0, 0x00200), (0xA8DA, 0x04000), (0xA8E0, 0x00004), (0xA8F2, 0x00100), (0xA8F8, 0x04000),
    (0xA8FB, 0x00100), (0xA8FC, 0x04000), (0xA8FD, 0x00100), (0xA8FF, 0x00004), (0xA900, 0x00200), (0xA90A, 0x00100),
    (0xA926, 0x00004), (0xA92E, 0x04000), (0xA92F, 0x01000), (0xA930, 0x00100), (0xA947, 0x00004), (0xA954, 0x04000),
    (0xA960, 0x00100), (0xA97D, 0x04000), (0xA980, 0x00004), (0xA984, 0x00100), (0xA9B3, 0x00004), (0xA9C1, 0x04000),
    (0xA9C8, 0x01000), (0xA9CA, 0x04000), (0xA9CF, 0x00100), (0xA9D0, 0x00200), (0xA9DA, 0x04000), (0xA9E0, 0x00100),
    (0xA9E5, 0x00004), (0xA9E6, 0x00100), (0xA9F0, 0x00200), (0xA9FA, 0x00100), (0xA9FF, 0x04000), (0xAA00, 0x00100),
    (0xAA29, 0x00004), (0xAA37, 0x04000), (0xAA40, 0x00100), (0xAA43, 0x00004), (0xAA44, 0x00100), (0xAA4C, 0x00004),
    (0xAA4E, 0x04000), (0xAA50, 0x00200), (0xAA5A, 0x04000), (0xAA5D, 0x01000), (0xAA60, 0x00100), (0xAA77, 0x04000),
    (0xAA7A, 0x00100), (0xAA7B, 0x00004), (0xAA7E, 0x00100), (0xAAB0, 0x00004), (0xAAB1, 0x00100), (0xAAB2, 0x00004),
    (0xAAB5, 0x00100), (0xAAB7, 0x00004), (0xAAB9, 0x00100), (0xAABE, 0x00004), (0xAAC0, 0x00100), (0xAAC1, 0x00004),
    (0xAAC2, 0x00100), (0xAAC3, 0x04000), (0xAADB, 0x00100), (0xAADE, 0x04000), (0xAAE0, 0x00100), (0xAAEB, 0x00004),
    (0xAAF0, 0x01000), (0xAAF2, 0x00100), (0xAAF5, 0x00004), (0xAAF7, 0x04000), (0xAB01, 0x00100), (0xAB07, 0x04000),
    (0xAB09, 0x00100), (0xAB0F, 0x04000), (0xAB11, 0x00100), (0xAB17, 0x04000), (0xAB20, 0x00100), (0xAB27, 0x04000),
    (0xAB28, 0x00100), (0xAB2F, 0x04000), (0xAB30, 0x00040), (0xAB5B, 0x04000), (0xAB5C, 0x00040), (0xAB69, 0x00100),
    (0xAB6A, 0x04000), (0xAB70, 0x00040), (0xABC0, 0x00100), (0xABE3, 0x00004), (0xABEB, 0x01000), (0xABEC, 0x00004),
    (0xABEE, 0x04000), (0xABF0, 0x00200), (0xABFA, 0x04000), (0xAC00, 0x00100), (0xD7A4, 0x04000), (0xD7B0, 0x00100),
    (0xD7C7, 0x04000), (0xD7CB, 0x00100), (0xD7FC, 0x04000), (0xF900, 0x00100), (0xFA6E, 0x04000), (0xFA70, 0x00100),
    (0xFADA, 0x04000), (0xFB00, 0x00040), (0xFB07, 0x04000), (0xFB13, 0x00040), (0xFB18, 0x04000), (0xFB1D, 0x00100),
    (0xFB1E, 0x00004), (0xFB1F, 0x00100), (0xFB29, 0x04000), (0xFB2A, 0x00100), (0xFB37, 0x04000), (0xFB38, 0x00100),
    (0xFB3D, 0x04000), (0xFB3E, 0x00100), (0xFB3F, 0x04000), (0xFB40, 0x00100), (0xFB42, 0x04000), (0xFB43, 0x00100),
    (0xFB45, 0x04000), (0xFB46, 0x00100), (0xFBB2, 0x04000), (0xFBD3, 0x00100), (0xFD3E, 0x02000), (0xFD40, 0x04000),
    (0xFD50, 0x00100), (0xFD90, 0x04000), (0xFD92, 0x00100), (0xFDC8, 0x04000), (0xFDF0, 0x00100), (0xFDFC, 0x04000),
    (0xFE00, 0x00004), (0xFE10, 0x00800), (0xFE12, 0x04000), (0xFE13, 0x00800), (0xFE14, 0x04000), (0xFE17, 0x02000),
    (0xFE19, 0x04000), (0xFE20, 0x00004), (0xFE30, 0x04000), (0xFE31, 0x00800), (0xFE33, 0x04000), (0xFE35, 0x02000),
    (0xFE45, 0x04000), (0xFE47, 0x02000), (0xFE49, 0x04000), (0xFE50, 0x00800), (0xFE52, 0x00400), (0xFE53, 0x04000),
    (0xFE55, 0x00800), (0xFE56, 0x01000), (0xFE58, 0x00800), (0xFE59, 0x02000), (0xFE5F, 0x04000), (0xFE63, 0x00800),
    (0xFE64, 0x04000), (0xFE70, 0x00100), (0xFE75, 0x04000), (0xFE76, 0x00100), (0xFEFD, 0x04000), (0xFEFF, 0x00010),
    (0xFF00, 0x04000), (0xFF01, 0x01000), (0xFF02, 0x04000), (0xFF08, 0x02000), (0xFF0A, 0x04000), (0xFF0C, 0x00800),
    (0xFF0E, 0x00400), (0xFF0F, 0x04000), (0xFF10, 0x00200), (0xFF1A, 0x00800), (0xFF1B, 0x04000), (0xFF1F, 0x01000),
    (0xFF20, 0x04000), (0xFF21, 0x00080), (0xFF3B, 0x02000), (0xFF3C, 0x04000), (0xFF3D, 0x02000), (0xFF3E, 0x04000),
    (0xFF41, 0x00040), (0xFF5B, 0x02000), (0xFF5C, 0x04000), (0xFF5D, 0x02000), (0xFF5E, 0x04000), (0xFF5F, 0x02000),
    (0xFF61, 0x01000), (0xFF62, 0x02000), (0xFF64, 0x00800), (0xFF65, 0x04000), (0xFF66, 0x00100), (0xFF9E, 0x00004),
    (0xFFA0, 0x00100), (0xFFBF, 0x04000), (0xFFC2, 0x00100), (0xFFC8, 0x04000), (0xFFCA, 0x00100), (0xFFD0, 0x04000),
    (0xFFD2, 0x00100), (0xFFD8, 0x04000), (0xFFDA, 0x00100), (0xFFDD, 0x04000), (0xFFF9, 0x00010), (0xFFFC, 0x04000),
    (0x10000, 0x00100), (0x1000C, 0x04000), (0x1000D, 0x00100), (0x10027, 0x04000), (0x10028, 0x00100), (0x1003B, 0x04000),
    (0x1003C, 0x00100), (0x1003E, 0x04000), (0x1003F, 0x00100), (0x1004E, 0x04000), (0x10050, 0x00100), (0x1005E, 0x04000),
    (0x10080, 0x00100), (0x100FB, 0x04000), (0x10140, 0x00100), (0x10175, 0x04000), (0x101FD, 0x00004), (0x101FE, 0x04000),
    (0x10280, 0x00100), (0x1029D, 0x04000), (0x102A0, 0x00100), (0x102D1, 0x04000), (0x102E0, 0x00004), (0x102E1, 0x04000),
    (0x10300, 0x00100), (0x10320, 0x04000), (0x1032D, 0x00100), (0x1034B, 0x04000), (0x10350, 0x00100), (0x10376, 0x00004),
    (0x1037B, 0x04000), (0x10380, 0x00100), (0x1039E, 0x04000), (0x103A0, 0x00100), (0x103C4, 0x04000), (0x103C8, 0x00100),
    (0x103D0, 0x04000), (0x103D1, 0x00100), (0x103D6, 0x04000), (0x10400, 0x00080), (0x10428, 0x00040), (0x10450, 0x00100),
    (0x1049E, 0x04000), (0x104A0, 0x00200), (0x104AA, 0x04000), (0x104B0, 0x00080), (0x104D4, 0x04000), (0x104D8, 0x00040),
    (0x104FC, 0x04000), (0x10500, 0x00100), (0x10528, 0x04000), (0x10530, 0x00100), (0x10564, 0x04000), (0x10570, 0x00080),
    (0x1057B, 0x04000), (0x1057C, 0x00080), (0x1058B, 0x04000), (0x1058C, 0x00080), (0x10593, 0x04000), (0x10594, 0x00080),
    (0x10596, 0x04000), (0x10597, 0x00040), (0x105A2, 0x04000), (0x105A3, 0x00040), (0x105B2, 0x04000), (0x105B3, 0x00040),
    (0x105BA, 0x04000), (0x105BB, 0x00040), (0x105BD, 0x04000), (0x10600, 0x00100), (0x10737, 0x04000), (0x10740, 0x00100),
    (0x10756, 0x04000), (0x10760, 0x00100), (0x10768, 0x04000), (0x10780, 0x00040), (0x10781, 0x00100), (0x10783, 0x00040),
    (0x10786, 0x04000), (0x10787, 0x00040), (0x107B1, 0x04000), (0x107B2, 0x00040), (0x107BB, 0x04000), (0x10800, 0x00100),
    (0x10806, 0x04000), (0x10808, 0x00100), (0x10809, 0x04000), (0x1080A, 0x00100), (0x10836, 0x04000), (0x10837, 0x00100),
    (0x10839, 0x04000), (0x1083C, 0x00100), (0x1083D, 0x04000), (0x1083F, 0x00100), (0x10856, 0x04000), (0x10860, 0x00100),
    (0x10877, 0x04000), (0x10880, 0x00100), (0x1089F, 0x04000), (0x108E0, 0x00100), (0x108F3, 0x04000), (0x108F4, 0x00100),
    (0x108F6, 0x04000), (0x10900, 0x00100), (0x10916, 0x04000), (0x10920, 0x00100), (0x1093A, 0x04000), (0x10980, 0x00100),
    (0x109B8, 0x04000), (0x109BE, 0x00100), (0x109C0, 0x04000), (0x10A00, 0x00100), (0x10A01, 0x00004), (0x10A04, 0x04000),
    (0x10A05, 0x00004), (0x10A07, 0x04000), (0x10A0C, 0x00004), (0x10A10, 0x00100), (0x10A14, 0x04000), (0x10A15, 0x00100),
    (0x10A18, 0x04000), (0x10A19, 0x00100), (0x10A36, 0x04000), (0x10A38, 0x00004), (0x10A3B, 0x04000), (0x10A3F, 0x00004),
    (0x10A40, 0x04000), (0x10A56, 0x01000), (0x10A58, 0x04000), (0x10A60, 0x00100), (0x10A7D, 0x04000), (0x10A80, 0x00100),
    (0x10A9D, 0x04000), (0x10AC0, 0x00100), (0x10AC8, 0x04000), (0x10AC9, 0x00100), (0x10AE5, 0x00004), (0x10AE7, 0x04000),
    (0x10B00, 0x00100), (0x10B36, 0x04000), (0x10B40, 0x00100), (0x10B56, 0x04000), (0x10B60, 0x00100), (0x10B73, 0x04000),
    (0x10B80, 0x00100), (0x10B92, 0x04000), (0x10C00, 0x00100), (0x10C49, 0x04000), (0x10C80, 0x00080), (0x10CB3, 0x04000),
    (0x10CC0, 0x00040), (0x10CF3, 0x04000), (0x10D00, 0x00100), (0x10D24, 0x00004), (0x10D28, 0x04000), (0x10D30, 0x00200),
    (0x10D3A, 0x04000), (0x10E80, 0x00100), (0x10EAA, 0x04000), (0x10EAB, 0x00004), (0x10EAD, 0x04000), (0x10EB0, 0x00100),
    (0x10EB2, 0x04000), (0x10EFD, 0x00004), (0x10F00, 0x00100), (0x10F1D, 0x04000), (0x10F27, 0x00100), (0x10F28, 0x04000),
    (0x10F30, 0x00100), (0x10F46, 0x00004), (0x10F51, 0x04000), (0x10F55, 0x01000), (0x10F5A, 0x04000), (0x10F70, 0x00100),
    (0x10F82, 0x00004), (0x10F86, 0x01000), (0x10F8A, 0x04000), (0x10FB0, 0x00100), (0x10FC5, 0x04000), (0x10FE0, 0x00100),
    (0x10FF7, 0x04000), (0x11000, 0x00004), (0x11003, 0x00100), (0x11038, 0x00004), (0x11047, 0x01000), (0x11049, 0x04000),
    (0x11066, 0x00200), (0x11070, 0x00004), (0x11071, 0x00100), (0x11073, 0x00004), (0x11075, 0x00100), (0x11076, 0x04000),
    (0x1107F, 0x00004), (0x11083, 0x00100), (0x110B0, 0x00004), (0x110BB, 0x04000), (0x110BD, 0x00200), (0x110BE, 0x01000),
    (0x110C2, 0x00004), (0x110C3, 0x04000), (0x110CD, 0x00200), (0x110CE, 0x04000), (0x110D0, 0x00100), (0x110E9, 0x04000),
    (0x110F0, 0x00200), (0x110FA, 0x04000), (0x11100, 0x00004), (0x11103, 0x00100), (0x11127, 0x00004), (0x11135, 0x04000),
    (0x11136, 0x00200), (0x11140, 0x04000), (0x11141, 0x01000), (0x11144, 0x00100), (0x11145, 0x00004), (0x11147, 0x00100),
    (0x11148, 0x04000), (0x11150, 0x00100), (0x11173, 0x00004), (0x11174, 0x04000), (0x11176, 0x00100), (0x11177, 0x04000),
    (0x11180, 0x00004), (0x11183, 0x00100), (0x111B3, 0x00004), (0x111C1, 0x00100), (0x111C5, 0x01000), (0x111C7, 0x04000),
    (0x111C9, 0x00004), (0x111CD, 0x01000), (0x111CE, 0x00004), (0x111D0, 0x00200), (0x111DA, 0x00100), (0x111DB, 0x04000),
    (0x111DC, 0x00100), (0x111DD, 0x04000), (0x111DE, 0x01000), (0x111E0, 0x04000), (0x11200, 0x00100), (0x11212, 0x04000),
    (0x11213, 0x00100), (0x1122C, 0x00004), (0x11238, 0x01000), (0x1123A, 0x04000), (0x1123B, 0x01000), (0x1123D, 0x04000),
    (0x1123E, 0x00004), (0x1123F, 0x00100), (0x11241, 0x00004), (0x11242, 0x04000), (0x11280, 0x00100), (0x11287, 0x04000),
    (0x11288, 0x00100), (0x11289, 0x04000), (0x1128A, 0x00100), (0x1128E, 0x04000), (0x1128F, 0x00100), (0x1129E, 0x04000),
    (0x1129F, 0x00100), (0x112A9, 0x01000), (0x112AA, 0x04000), (0x112B0, 0x00100), (0x112DF, 0x00004), (0x112EB, 0x04000),
    (0x112F0, 0x00200), (0x112FA, 0x04000), (0x11300, 0x00004), (0x11304, 0x04000), (0x11305, 0x00100), (0x1130D, 0x04000),
    (0x1130F, 0x00100), (0x11311, 0x04000), (0x11313, 0x00100), (0x11329, 0x04000), (0x1132A, 0x00100), (0x11331, 0x04000),
    (0x11332, 0x00100), (0x11334, 0x04000), (0x11335, 0x00100), (0x1133A, 0x04000), (0x1133B, 0x00004), (0x1133D, 0x00100),
    (0x1133E, 0x00004), (0x11345, 0x04000), (0x11347, 0x00004), (0x11349, 0x04000), (0x1134B, 0x00004), (0x1134E, 0x04000),
    (0x11350, 0x00100), (0x11351, 0x04000), (0x11357, 0x00004), (0x11358, 0x04000), (0x1135D, 0x00100), (0x11362, 0x00004),
    (0x11364, 0x04000), (0x11366, 0x00004), (0x1136D, 0x04000), (0x11370, 0x00004), (0x11375, 0x04000), (0x11400, 0x00100),
    (0x11435, 0x00004), (0x11447, 0x00100), (0x1144B, 0x01000), (0x1144D, 0x04000), (0x11450, 0x00200), (0x1145A, 0x04000),
    (0x1145E, 0x00004), (0x1145F, 0x00100), (0x11462, 0x04000), (0x11480, 0x00100), (0x114B0, 0x00004), (0x114C4, 0x00100),
    (0x114C6, 0x04000), (0x114C7, 0x00100), (0x114C8, 0x04000), (0x114D0, 0x00200), (0x114DA, 0x04000), (0x11580, 0x00100),
    (0x115AF, 0x00004), (0x115B6, 0x04000), (0x115B8, 0x00004), (0x115C1, 0x04000), (0x115C2, 0x01000), (0x115C4, 0x04000),
    (0x115C9, 0x01000), (0x115D8, 0x00100), (0x115DC, 0x00004), (0x115DE, 0x04000), (0x11600, 0x00100), (0x11630, 0x00004),
    (0x11641, 0x01000), (0x11643, 0x04000), (0x11644, 0x00100), (0x11645, 0x04000), (0x11650, 0x00200), (0x1165A, 0x04000),
    (0x11680, 0x00100), (0x116AB, 0x00004), (0x116B8, 0x00100), (0x116B9, 0x04000), (0x116C0, 0x00200), (0x116CA, 0x04000),
    (0x11700, 0x00100), (0x1171B, 0x04000), (0x1171D, 0x00004), (0x1172C, 0x04000), (0x11730, 0x00200), (0x1173A, 0x04000),
    (0x1173C, 0x01000), (0x1173F, 0x04000), (0x11740, 0x00100), (0x11747, 0x04000), (0x11800, 0x00100), (0x1182C, 0x00004),
    (0x1183B, 0x04000), (0x118A0, 0x00080), (0x118C0, 0x00040), (0x118E0, 0x00200), (0x118EA, 0x04000), (0x118FF, 0x00100),
    (0x11907, 0x04000), (0x11909, 0x00100), (0x1190A, 0x04000), (0x1190C, 0x00100), (0x11914, 0x04000), (0x11915, 0x00100),
    (0x11917, 0x04000), (0x11918, 0x00100), (0x11930, 0x00004), (0x11936, 0x04000), (0x11937, 0x00004), (0x11939, 0x04000),
    (0x1193B, 0x00004), (0x1193F, 0x00100), (0x11940, 0x00004), (0x11941, 0x00100), (0x11942, 0x00004), (0x11944, 0x01000),
    (0x11945, 0x04000), (0x11946, 0x01000), (0x11947, 0x04000), (0x11950, 0x00200), (0x1195A, 0x04000), (0x119A0, 0x00100),
    (0x119A8, 0x04000), (0x119AA, 0x00100), (0x119D1, 0x00004), (0x119D8, 0x04000), (0x119DA, 0x00004), (0x119E1, 0x00100),
    (0x119E2, 0x04000), (0x119E3, 0x00100), (0x119E4, 0x00004), (0x119E5, 0x04000), (0x11A00, 0x00100), (0x11A01, 0x00004),
    (0x11A0B, 0x00100), (0x11A33, 0x00004), (0x11A3A, 0x00100), (0x11A3B, 0x00004), (0x11A3F, 0x04000), (0x11A42, 0x01000),
    (0x11A44, 0x04000), (0x11A47, 0x00004), (0x11A48, 0x04000), (0x11A50, 0x00100), (0x11A51, 0x00004), (0x11A5C, 0x00100),
    (0x11A8A, 0x00004), (0x11A9A, 0x04000), (0x11A9B, 0x01000), (0x11A9D, 0x00100), (0x11A9E, 0x04000), (0x11AB0, 0x00100),
    (0x11AF9, 0x04000), (0x11C00, 0x00100), (0x11C09, 0x04000), (0x11C0A, 0x00100), (0x11C2F, 0x00004), (0x11C37, 0x04000),
    (0x11C38, 0x00004), (0x11C40, 0x00100), (0x11C41, 0x01000), (0x11C43, 0x04000), (0x11C50, 0x00200), (0x11C5A, 0x04000),
    (0x11C72, 0x00100), (0x11C90, 0x04000), (0x11C92, 0x00004), (0x11CA8, 0x04000), (0x11CA9, 0x00004), (0x11CB7, 0x04000),
    (0x11D00, 0x00100), (0x11D07, 0x04000), (0x11D08, 0x00100), (0x11D0A, 0x04000), (0x11D0B, 0x00100), (0x11D31, 0x00004),
    (0x11D37, 0x04000), (0x11D3A, 0x00004), (0x11D3B, 0x04000), (0x11D3C, 0x00004), (0x11D3E, 0x04000), (0x11D3F, 0x00004),
    (0x11D46, 0x00100), (0x11D47, 0x00004), (0x11D48, 0x04000), (0x11D50, 0x00200), (0x11D5A, 0x04000), (0x11D60, 0x00100),
    (0x11D66, 0x04000), (0x11D67, 0x00100), (0x11D69, 0x04000), (0x11D6A, 0x00100), (0x11D8A, 0x00004), (0x11D8F, 0x04000),
    (0x11D90, 0x00004), (0x11D92, 0x04000), (0x11D93, 0x00004), (0x11D98, 0x00100), (0x11D99, 0x04000), (0x11DA0, 0x00200),
    (0x11DAA, 0x04000), (0x11EE0, 0x00100), (0x11EF3, 0x00004), (0x11EF7, 0x01000), (0x11EF9, 0x04000), (0x11F00, 0x00004),
    (0x11F02, 0x00100), (0x11F03, 0x00004), (0x11F04, 0x00100), (0x11F11, 0x04000), (0x11F12, 0x00100), (0x11F34, 0x00004),
    (0x11F3B, 0x04000), (0x11F3E, 0x00004), (0x11F43, 0x01000), (0x11F45, 0x04000), (0x11F50, 0x00200), (0x11F5A, 0x04000),
    (0x11FB0, 0x00100), (0x11FB1, 0x04000), (0x12000, 0x00100), (0x1239A, 0x04000), (0x12400, 0x00100), (0x1246F, 0x04000),
    (0x12480, 0x00100), (0x12544, 0x04000), (0x12F90, 0x00100), (0x12FF1, 0x04000), (0x13000, 0x00100), (0x13430, 0x00010),
    (0x13440, 0x00004), (0x13441, 0x00100), (0x13447, 0x00004), (0x13456, 0x04000), (0x14400, 0x00100), (0x14647, 0x04000),
    (0x16800, 0x00100), (0x16A39, 0x04000), (0x16A40, 0x00100), (0x16A5F, 0x04000), (0x16A60, 0x00200), (0x16A6A, 0x04000),
    (0x16A6E, 0x01000), (0x16A70, 0x00100), (0x16ABF, 0x04000), (0x16AC0, 0x00200), (0x16ACA, 0x04000), (0x16AD0, 0x00100),
    (0x16AEE, 0x04000), (0x16AF0, 0x00004), (0x16AF5, 0x01000), (0x16AF6, 0x04000), (0x16B00, 0x00100), (0x16B30, 0x00004),
    (0x16B37, 0x01000), (0x16B39, 0x04000), (0x16B40, 0x00100), (0x16B44, 0x01000), (0x16B45, 0x04000), (0x16B50, 0x00200),
    (0x16B5A, 0x04000), (0x16B63, 0x00100), (0x16B78, 0x04000), (0x16B7D, 0x00100), (0x16B90, 0x04000), (0x16E40, 0x00080),
    (0x16E60, 0x00040), (0x16E80, 0x04000), (0x16E98, 0x01000), (0x16E99, 0x04000), (0x16F00, 0x00100), (0x16F4B, 0x04000),
    (0x16F4F, 0x00004), (0x16F50, 0x00100), (0x16F51, 0x00004), (0x16F88, 0x04000), (0x16F8F, 0x00004), (0x16F93, 0x00100),
    (0x16FA0, 0x04000), (0x16FE0, 0x00100), (0x16FE2, 0x04000), (0x16FE3, 0x00100), (0x16FE4, 0x00004), (0x16FE5, 0x04000),
    (0x16FF0, 0x00004), (0x16FF2, 0x04000), (0x17000, 0x00100), (0x187F8, 0x04000), (0x18800, 0x00100), (0x18CD6, 0x04000),
    (0x18D00, 0x00100), (0x18D09, 0x04000), (0x1AFF0, 0x00100), (0x1AFF4, 0x04000), (0x1AFF5, 0x00100), (0x1AFFC, 0x04000),
    (0x1AFFD, 0x00100), (0x1AFFF, 0x04000), (0x1B000, 0x00100), (0x1B123, 0x04000), (0x1B132, 0x00100), (0x1B133, 0x04000),
    (0x1B150, 0x00100), (0x1B153, 0x04000), (0x1B155, 0x00100), (0x1B156, 0x04000), (0x1B164, 0x00100), (0x1B168, 0x04000),
    (0x1B170, 0x00100), (0x1B2FC, 0x04000), (0x1BC00, 0x00100), (0x1BC6B, 0x04000), (0x1BC70, 0x00100), (0x1BC7D, 0x04000),
    (0x1BC80, 0x00100), (0x1BC89, 0x04000), (0x1BC90, 0x00100), (0x1BC9A, 0x04000), (0x1BC9D, 0x00004), (0x1BC9F, 0x01000),
    (0x1BCA0, 0x00010), (0x1BCA4, 0x04000), (0x1CF00, 0x00004), (0x1CF2E, 0x04000), (0x1CF30, 0x00004), (0x1CF47, 0x04000),
    (0x1D165, 0x00004), (0x1D16A, 0x04000), (0x1D16D, 0x00004), (0x1D173, 0x00010), (0x1D17B, 0x00004), (0x1D183, 0x04000),
    (0x1D185, 0x00004), (0x1D18C, 0x04000), (0x1D1AA, 0x00004), (0x1D1AE, 0x04000), (0x1D242, 0x00004), (0x1D245, 0x04000),
    (0x1D400, 0x00080), (0x1D41A, 0x00040), (0x1D434, 0x00080), (0x1D44E, 0x00040), (0x1D455, 0x04000), (0x1D456, 0x00040),
    (0x1D468, 0x00080), (0x1D482, 0x00040), (0x1D49C, 0x00080), (0x1D49D, 0x04000), (0x1D49E, 0x00080), (0x1D4A0, 0x04000),
    (0x1D4A2, 0x00080), (0x1D4A3, 0x04000), (0x1D4A5, 0x00080), (0x1D4A7, 0x04000), (0x1D4A9, 0x00080), (0x1D4AD, 0x04000),
    (0x1D4AE, 0x00080), (0x1D4B6, 0x00040), (0x1D4BA, 0x04000), (0x1D4BB, 0x00040), (0x1D4BC, 0x04000), (0x1D4BD, 0x00040),
    (0x1D4C4, 0x04000), (0x1D4C5, 0x00040), (0x1D4D0, 0x00080), (0x1D4EA, 0x00040), (0x1D504, 0x00080), (0x1D506, 0x04000),
    (0x1D507, 0x00080), (0x1D50B, 0x04000), (0x1D50D, 0x00080), (0x1D515, 0x04000), (0x1D516, 0x00080), (0x1D51D, 0x04000),
    (0x1D51E, 0x00040), (0x1D538, 0x00080), (0x1D53A, 0x04000), (0x1D53B, 0x00080), (0x1D53F, 0x04000), (0x1D540, 0x00080),
    (0x1D545, 0x04000), (0x1D546, 0x00080), (0x1D547, 0x04000), (0x1D54A, 0x00080), (0x1D551, 0x04000), (0x1D552, 0x00040),
    (0x1D56C, 0x00080), (0x1D586, 0x00040), (0x1D5A0, 0x00080), (0x1D5BA, 0x00040), (0x1D5D4, 0x00080), (0x1D5EE, 0x00040),
    (0x1D608, 0x00080), (0x1D622, 0x00040), (0x1D63C, 0x00080), (0x1D656, 0x00040), (0x1D670, 0x00080), (0x1D68A, 0x00040),
    (0x1D6A6, 0x04000), (0x1D6A8, 0x00080), (0x1D6C1, 0x04000), (0x1D6C2, 0x00040), (0x1D6DB, 0x04000), (0x1D6DC, 0x00040),
    (0x1D6E2, 0x00080), (0x1D6FB, 0x04000), (0x1D6FC, 0x00040), (0x1D715, 0x04000), (0x1D716, 0x00040), (0x1D71C, 0x00080),
    (0x1D735, 0x04000), (0x1D736, 0x00040), (0x1D74F, 0x04000), (0x1D750, 0x00040), (0x1D756, 0x00080), (0x1D76F, 0x04000),
    (0x1D770, 0x00040), (0x1D789, 0x04000), (0x1D78A, 0x00040), (0x1D790, 0x00080), (0x1D7A9, 0x04000), (0x1D7AA, 0x00040),
    (0x1D7C3, 0x04000), (0x1D7C4, 0x00040), (0x1D7CA, 0x00080), (0x1D7CB, 0x00040), (0x1D7CC, 0x04000), (0x1D7CE, 0x00200),
    (0x1D800, 0x04000), (0x1DA00, 0x00004), (0x1DA37, 0x04000), (0x1DA3B, 0x00004), (0x1DA6D, 0x04000), (0x1DA75, 0x00004),
    (0x1DA76, 0x04000), (0x1DA84, 0x00004), (0x1DA85, 0x04000), (0x1DA88, 0x01000), (0x1DA89, 0x04000), (0x1DA9B, 0x00004),
    (0x1DAA0, 0x04000), (0x1DAA1, 0x00004), (0x1DAB0, 0x04000), (0x1DF00, 0x00040), (0x1DF0A, 0x00100), (0x1DF0B, 0x00040),
    (0x1DF1F, 0x04000), (0x1DF25, 0x00040), (0x1DF2B, 0x04000), (0x1E000, 0x00004), (0x1E007, 0x04000), (0x1E008, 0x00004),
    (0x1E019, 0x04000), (0x1E01B, 0x00004), (0x1E022, 0x04000), (0x1E023, 0x00004), (0x1E025, 0x04000), (0x1E026, 0x00004),
    (0x1E02B, 0x04000), (0x1E030, 0x00040), (0x1E06E, 0x04000), (0x1E08F, 0x00004), (0x1E090, 0x04000), (0x1E100, 0x00100),
    (0x1E12D, 0x04000), (0x1E130, 0x00004), (0x1E137, 0x00100), (0x1E13E, 0x04000), (0x1E140, 0x00200), (0x1E14A, 0x04000),
    (0x1E14E, 0x00100), (0x1E14F, 0x04000), (0x1E290, 0x00100), (0x1E2AE, 0x00004), (0x1E2AF, 0x04000), (0x1E2C0, 0x00100),
    (0x1E2EC, 0x00004), (0x1E2F0, 0x00200), (0x1E2FA, 0x04000), (0x1E4D0, 0x00100), (0x1E4EC, 0x00004), (0x1E4F0, 0x00200),
    (0x1E4FA, 0x04000), (0x1E7E0, 0x00100), (0x1E7E7, 0x04000), (0x1E7E8, 0x00100), (0x1E7EC, 0x04000), (0x1E7ED, 0x00100),
    (0x1E7EF, 0x04000), (0x1E7F0, 0x00100), (0x1E7FF, 0x04000), (0x1E800, 0x00100), (0x1E8C5, 0x04000), (0x1E8D0, 0x00004),
    (0x1E8D7, 0x04000), (0x1E900, 0x00080), (0x1E922, 0x00040), (0x1E944, 0x00004), (0x1E94B, 0x00100), (0x1E94C, 0x04000),
    (0x1E950, 0x00200), (0x1E95A, 0x04000), (0x1EE00, 0x00100), (0x1EE04, 0x04000), (0x1EE05, 0x00100), (0x1EE20, 0x04000),
    (0x1EE21, 0x00100), (0x1EE23, 0x04000), (0x1EE24, 0x00100), (0x1EE25, 0x04000), (0x1EE27, 0x00100), (0x1EE28, 0x04000),
    (0x1EE29, 0x00100), (0x1EE33, 0x04000), (0x1EE34, 0x00100), (0x1EE38, 0x04000), (0x1EE39, 0x00100), (0x1EE3A, 0x04000),
    (0x1EE3B, 0x00100), (0x1EE3C, 0x04000), (0x1EE42, 0x00100), (0x1EE43, 0x04000), (0x1EE47, 0x00100), (0x1EE48, 0x04000),
    (0x1EE49, 0x00100), (0x1EE4A, 0x04000), (0x1EE4B, 0x00100), (0x1EE4C, 0x04000), (0x1EE4D, 0x00100), (0x1EE50, 0x04000),
    (0x1EE51, 0x00100), (0x1EE53, 0x04000), (0x1EE54, 0x00100), (0x1EE55, 0x04000), (0x1EE57, 0x00100), (0x1EE58, 0x04000),
    (0x1EE59, 0x00100), (0x1EE5A, 0x04000), (0x1EE5B, 0x00100), (0x1EE5C, 0x04000), (0x1EE5D, 0x00100), (0x1EE5E, 0x04000),
    (0x1EE5F, 0x00100), (0x1EE60, 0x04000), (0x1EE61, 0x00100), (0x1EE63, 0x04000), (0x1EE64, 0x00100), (0x1EE65, 0x04000),
    (0x1EE67, 0x00100), (0x1EE6B, 0x04000), (0x1EE6C, 0x00100), (0x1EE73, 0x04000), (0x1EE74, 0x00100), (0x1EE78, 0x04000),
    (0x1EE79, 0x00100), (0x1EE7D, 0x04000), (0x1EE7E, 0x00100), (0x1EE7F, 0x04000), (0x1EE80, 0x00100), (0x1EE8A, 0x04000),
    (0x1EE8B, 0x00100), (0x1EE9C, 0x04000), (0x1EEA1, 0x00100), (0x1EEA4, 0x04000), (0x1EEA5, 0x00100), (0x1EEAA, 0x04000),
    (0x1EEAB, 0x00100), (0x1EEBC, 0x04000), (0x1F130, 0x00080), (0x1F14A, 0x04000), (0x1F150, 0x00080), (0x1F16A, 0x04000),
    (0x1F170, 0x00080), (0x1F18A, 0x04000), (0x1F676, 0x02000), (0x1F679, 0x04000), (0x1FBF0, 0x00200), (0x1FBFA, 0x04000),
    (0x20000, 0x00100), (0x2A6E0, 0x04000), (0x2A700, 0x00100), (0x2B73A, 0x04000), (0x2B740, 0x00100), (0x2B81E, 0x04000),
    (0x2B820, 0x00100), (0x2CEA2, 0x04000), (0x2CEB0, 0x00100), (0x2EBE1, 0x04000), (0x2EBF0, 0x00100), (0x2EE5E, 0x04000),
    (0x2F800, 0x00100), (0x2FA1E, 0x04000), (0x30000, 0x00100), (0x3134B, 0x04000), (0x31350, 0x00100), (0x323B0, 0x04000),
    (0xE0001, 0x00010), (0xE0002, 0x04000), (0xE0020, 0x00004), (0xE0080, 0x04000), (0xE0100, 0x00004), (0xE01F0, 0x04000),
];

pub(crate) static SENTENCE_ASCII: [u32; 128] = [
    0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000,
    0x04000, 0x00020, 0x00002, 0x00020, 0x00020, 0x00001, 0x04000, 0x04000,
    0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000,
    0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000, 0x04000,
    0x00020, 0x01000, 0x02000, 0x04000, 0x04000, 0x04000, 0x04000, 0x02000,
    0x02000, 0x02000, 0x04000, 0x04000, 0x00800, 0x00800, 0x00400, 0x04000,
    0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200, 0x00200,
    0x00200, 0x00200, 0x00800, 0x04000, 0x04000, 0x04000, 0x04000, 0x01000,
    0x04000, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080,
    0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080,
    0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080, 0x00080,
    0x00080, 0x00080, 0x00080, 0x02000, 0x04000, 0x02000, 0x04000, 0x04000,
    0x04000, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040,
    0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040,
    0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040, 0x00040,
    0x00040, 0x00040, 0x00040, 0x02000, 0x04000, 0x02000, 0x04000, 0x04000,
];

/// General_Category plus Extended_Pictographic, Regional_Indicator and wide East_Asian_Width
pub(crate) static CATEGORY_RANGES: &[(u32, u32)] = &[
    (0x0000, 0x00088), (0x0020, 0x00220), (0x0021, 0x02010), (0x0024, 0x000C0), (0x0025, 0x02010), (0x0028, 0x01010),
    (0x0029, 0x00090), (0x002A, 0x02010), (0x002B, 0x00140), (0x002C, 0x02010), (0x002D, 0x00210), (0x002E, 0x02010),
    (0x0030, 0x00084), (0x003A, 0x02010), (0x003C, 0x00140), (0x003F, 0x02010), (0x0041, 0x00801), (0x005B, 0x01010),
    (0x005C, 0x02010), (0x005D, 0x00090), (0x005E, 0x00240), (0x005F, 0x00110), (0x0060, 0x00240), (0x0061, 0x00081),
    (0x007B, 0x01010), (0x007C, 0x00140), (0x007D, 0x00090), (0x007E, 0x00140), (0x007F, 0x00088), (0x00A0, 0x00220),
    (0x00A1, 0x02010), (0x00A2, 0x000C0), (0x00A6, 0x00440), (0x00A7, 0x02010), (0x00A8, 0x00240), (0x00A9, 0x04440),
    (0x00AA, 0x00201), (0x00AB, 0x00810), (0x00AC, 0x00140), (0x00AD, 0x00108), (0x00AE, 0x04440), (0x00AF, 0x00240),
    (0x00B0, 0x00440), (0x00B1, 0x00140), (0x00B2, 0x00204), (0x00B4, 0x00240), (0x00B5, 0x00081), (0x00B6, 0x02010),
    (0x00B8, 0x00240), (0x00B9, 0x00204), (0x00BA, 0x00201), (0x00BB, 0x00410), (0x00BC, 0x00204), (0x00BF, 0x02010),
    (0x00C0, 0x00801), (0x00D7, 0x00140), (0x00D8, 0x00801), (0x00DF, 0x00081), (0x00F7, 0x00140), (0x00F8, 0x00081),
    (0x0100, 0x00801), (0x0101, 0x00081), (0x0102, 0x00801), (0x0103, 0x00081), (0x0104, 0x00801), (0x0105, 0x00081),
    (0x0106, 0x00801), (0x0107, 0x00081), (0x0108, 0x00801), (0x0109, 0x00081), (0x010A, 0x00801), (0x010B, 0x00081),
    (0x010C, 0x00801), (0x010D, 0x00081), (0x010E, 0x00801), (0x010F, 0x00081), (0x0110, 0x00801), (0x0111, 0x00081),
    (0x0112, 0x00801), (0x0113, 0x00081), (0x0114, 0x00801), (0x0115, 0x00081), (0x0116, 0x00801), (0x0117, 0x00081),
    (0x0118, 0x00801), (0x0119, 0x00081), (0x011A, 0x00801), (0x011B, 0x00081), (0x011C, 0x00801), (0x011D, 0x00081),
    (0x011E, 0x00801), (0x011F, 0x00081), (0x0120, 0x00801), (0x0121, 0x00081), (0x0122, 0x00801), (0x0123, 0x00081),
    (0x0124, 0x00801), (0x0125, 0x00081), (0x0126, 0x00801), (0x0127, 0x00081), (0x0128, 0x00801), (0x0129, 0x00081),
    (0x012A, 0x00801), (0x012B, 0x00081), (0x012C, 0x00801), (0x012D, 0x00081), (0x012E, 0x00801), (0x012F, 0x00081),
    (0x0130, 0x00801), (0x0131, 0x00081), (0x0132, 0x00801), (0x0133, 0x00081), (0x0134, 0x00801), (0x0135, 0x00081),
    (0x0136, 0x00801), (0x0137, 0x00081), (0x0139, 0x00801), (0x013A, 0x00081), (0x013B, 0x00801), (0x013C, 0x00081),
    (0x013D, 0x00801), (0x013E, 0x00081), (0x013F, 0x00801), (0x0140, 0x00081), (0x0141, 0x00801), (0x0142, 0x00081),
    (0x0143, 0x00801), (0x0144, 0x00081), (0x0145, 0x00801), (0x0146, 0x00081), (0x0147, 0x00801), (0x0148, 0x00081),
    (0x014A, 0x00801), (0x014B, 0x00081), (0x014C, 0x00801), (0x014D, 0x00081), (0x014E, 0x00801), (0x014F, 0x00081),
    (0x0150, 0x00801), (0x0151, 0x00081), (0x0152, 0x00801), (0x0153, 0x00081), (0x0154, 0x00801), (0x0155, 0x00081),
    (0x0156, 0x00801), (0x0157, 0x00081), (0x0158, 0x00801), (0x0159, 0x00081), (0x015A, 0x00801), (0x015B, 0x00081),
    (0x015C, 0x00801), (0x015D, 0x00081), (0x015E, 0x00801), (0x015F, 0x00081), (0x0160, 0x00801), (0x0161, 0x00081),
    (0x0162, 0x00801), (0x0163, 0x00081), (0x0164, 0x00801), (0x0165, 0x00081), (0x0166, 0x00801), (0x0167, 0x00081),
    (0x0168, 0x00801), (0x0169, 0x00081), (0x016A, 0x00801), (0x016B, 0x00081), (0x016C, 0x00801), (0x016D, 0x00081),
    (0x016E, 0x00801), (0x016F, 0x00081), (0x0170, 0x00801), (0x0171, 0x00081), (0x0172, 0x00801), (0x0173, 0x00081),
    (0x0174, 0x00801), (0x0175, 0x00081), (0x0176, 0x00801), (0x0177, 0x00081), (0x0178, 0x00801), (0x017A, 0x00081),
    (0x017B, 0x00801), (0x017C, 0x00081), (0x017D, 0x00801), (0x017E, 0x00081), (0x0181, 0x00801), (0x0183, 0x00081),
    (0x0184, 0x00801), (0x0185, 0x00081), (0x0186, 0x00801), (0x0188, 0x00081), (0x0189, 0x00801), (0x018C, 0x00081),
    (0x018E, 0x00801), (0x0192, 0x00081), (0x0193, 0x00801), (0x0195, 0x00081), (0x0196, 0x00801), (0x0199, 0x00081),
    (0x019C, 0x00801), (0x019E, 0x00081), (0x019F, 0x00801), (0x01A1, 0x00081), (0x01A2, 0x00801), (0x01A3, 0x00081),
    (0x01A4, 0x00801), (0x01A5, 0x00081), (0x01A6, 0x00801), (0x01A8, 0x00081), (0x01A9, 0x00801), (0x01AA, 0x00081),
    (0x01AC, 0x00801), (0x01AD, 0x00081), (0x01AE, 0x00801), (0x01B0, 0x00081), (0x01B1, 0x00801), (0x01B4, 0x00081),
    (0x01B5, 0x00801), (0x01B6, 0x00081), (0x01B7, 0x00801), (0x01B9, 0x00081), (0x01BB, 0x00201), (0x01BC, 0x00801),
    (0x01BD, 0x00081), (0x01C0, 0x00201), (0x01C4, 0x00801), (0x01C5, 0x00401), (0x01C6, 0x00081), (0x01C7, 0x00801),
    (0x01C8, 0x00401), (0x01C9, 0x00081), (0x01CA, 0x00801), (0x01CB, 0x00401), (0x01CC, 0x00081), (0x01CD, 0x00801),
    (0x01CE, 0x00081), (0x01CF, 0x00801), (0x01D0, 0x00081), (0x01D1, 0x00801), (0x01D2, 0x00081), (0x01D3, 0x00801),
    (0x01D4, 0x00081), (0x01D5, 0x00801), (0x01D6, 0x00081), (0x01D7, 0x00801), (0x01D8, 0x00081), (0x01D9, 0x00801),
    (0x01DA, 0x00081), (0x01DB, 0x00801), (0x01DC, 0x00081), (0x01DE, 0x00801), (0x01DF, 0x00081), (0x01E0, 0x00801),
    (0x01E1, 0x00081), (0x01E2, 0x00801), (0x01E3, 0x00081), (0x01E4, 0x00801), (0x01E5, 0x00081), (0x01E6, 0x00801),
    (0x01E7, 0x00081), (0x01E8, 0x00801), (0x01E9, 0x00081), (0x01EA, 0x00801), (0x01EB, 0x00081), (0x01EC, 0x00801),
    (0x01ED, 0x00081), (0x01EE, 0x00801), (0x01EF, 0x00081), (0x01F1, 0x00801), (0x01F2, 0x00401), (0x01F3, 0x00081),
    (0x01F4, 0x00801), (0x01F5, 0x00081), (0x01F6, 0x00801), (0x01F9, 0x00081), (0x01FA, 0x00801), (0x01FB, 0x00081),
    (0x01FC, 0x00801), (0x01FD, 0x00081), (0x01FE, 0x00801), (0x01FF, 0x00081), (0x0200, 0x00801), (0x0201, 0x00081),
    (0x0202, 0x00801), (0x0203, 0x00081), (0x0204, 0x00801), (0x0205, 0x00081), (0x0206, 0x00801), (0x0207, 0x00081),
    (0x0208, 0x00801), (0x0209, 0x00081), (0x020A, 0x00801), (0x020B, 0x00081), (0x020C, 0x00801), (0x020D, 0x00081),
    (0x020E, 0x00801), (0x020F, 0x00081), (0x0210, 0x00801), (0x0211, 0x00081), (0x0212, 0x00801), (0x0213, 0x00081),
    (0x0214, 0x00801), (0x0215, 0x00081), (0x0216, 0x00801), (0x0217, 0x00081), (0x0218, 0x00801), (0x0219, 0x00081),
    (0x021A, 0x00801), (0x021B, 0x00081), (0x021C, 0x00801), (0x021D, 0x00081), (0x021E, 0x00801), (0x021F, 0x00081),
    (0x0220, 0x00801), (0x0221, 0x00081), (0x0222, 0x00801), (0x0223, 0x00081), (0x0224, 0x00801), (0x0225, 0x00081),
    (0x0226, 0x00801), (0x0227, 0x00081), (0x0228, 0x00801), (0x0229, 0x00081), (0x022A, 0x00801), (0x022B, 0x00081),
    (0x022C, 0x00801), (0x022D, 0x00081), (0x022E, 0x00801), (0x022F, 0x00081), (0x0230, 0x00801), (0x0231, 0x00081),
    (0x0232, 0x00801), (0x0233, 0x00081), (0x023A, 0x00801), (0x023C, 0x00081), (0x023D, 0x00801), (0x023F, 0x00081),
    (0x0241, 0x00801), (0x0242, 0x00081), (0x0243, 0x00801), (0x0247, 0x00081), (0x0248, 0x00801), (0x0249, 0x00081),
    (0x024A, 0x00801), (0x024B, 0x00081), (0x024C, 0x00801), (0x024D, 0x00081), (0x024E, 0x00801), (0x024F, 0x00081),
    (0x0294, 0x00201), (0x0295, 0x00081), (0x02B0, 0x00101), (0x02C2, 0x00240), (0x02C6, 0x00101), (0x02D2, 0x00240),
    (0x02E0, 0x00101), (0x02E5, 0x00240), (0x02EC, 0x00101), (0x02ED, 0x00240), (0x02EE, 0x00101), (0x02EF, 0x00240),
    (0x0300, 0x00102), (0x0370, 0x00801), (0x0371, 0x00081), (0x0372, 0x00801), (0x0373, 0x00081), (0x0374, 0x00101),
    (0x0375, 0x00240), (0x0376, 0x00801), (0x0377, 0x00081), (0x0378, 0x00208), (0x037A, 0x00101), (0x037B, 0x00081),
    (0x037E, 0x02010), (0x037F, 0x00801), (0x0380, 0x00208), (0x0384, 0x00240), (0x0386, 0x00801), (0x0387, 0x02010),
    (0x0388, 0x00801), (0x038B, 0x00208), (0x038C, 0x00801), (0x038D, 0x00208), (0x038E, 0x00801), (0x0390, 0x00081),
    (0x0391, 0x00801), (0x03A2, 0x00208), (0x03A3, 0x00801), (0x03AC, 0x00081), (0x03CF, 0x00801), (0x03D0, 0x00081),
    (0x03D2, 0x00801), (0x03D5, 0x00081), (0x03D8, 0x00801), (0x03D9, 0x00081), (0x03DA, 0x00801), (0x03DB, 0x00081),
    (0x03DC, 0x00801), (0x03DD, 0x00081), (0x03DE, 0x00801), (0x03DF, 0x00081), (0x03E0, 0x00801), (0x03E1, 0x00081),
    (0x03E2, 0x00801), (0x03E3, 0x00081), (0x03E4, 0x00801), (0x03E5, 0x00081), (0x03E6, 0x00801), (0x03E7, 0x00081),
    (0x03E8, 0x00801), (0x03E9, 0x00081), (0x03EA, 0x00801), (0x03EB, 0x00081), (0x03EC, 0x00801), (0x03ED, 0x00081),
    (0x03EE, 0x00801), (0x03EF, 0x00081), (0x03F4, 0x00801), (0x03F5, 0x00081), (0x03F6, 0x00140), (0x03F7, 0x00801),
    (0x03F8, 0x00081), (0x03F9, 0x00801), (0x03FB, 0x00081), (0x03FD, 0x00801), (0x0430, 0x00081), (0x0460, 0x00801),
    (0x0461, 0x00081), (0x0462, 0x00801), (0x0463, 0x00081), (0x0464, 0x00801), (0x0465, 0x00081), (0x0466, 0x00801),
    (0x0467, 0x00081), (0x0468, 0x00801), (0x0469, 0x00081), (0x046A, 0x00801), (0x046B, 0x00081), (0x046C, 0x00801),
    (0x046D, 0x00081), (0x046E, 0x00801), (0x046F, 0x00081), (0x0470, 0x00801), (0x0471, 0x00081), (0x0472, 0x00801),
    (0x0473, 0x00081), (0x0474, 0x00801), (0x0475, 0x00081), (0x0476, 0x00801), (0x0477, 0x00081), (0x0478, 0x00801),
    (0x0479, 0x00081), (0x047A, 0x00801), (0x047B, 0x00081), (0x047C, 0x00801), (0x047D, 0x00081), (0x047E, 0x00801),
    (0x047F, 0x00081), (0x0480, 0x00801), (0x0481, 0x00081), (0x0482, 0x00440), (0x0483, 0x00102), (0x0488, 0x00082),
    (0x048A, 0x00801), (0x048B, 0x00081), (0x048C, 0x00801), (0x048D, 0x00081), (0x048E, 0x00801), (0x048F, 0x00081),
    (0x0490, 0x00801), (0x0491, 0x00081), (0x0492, 0x00801), (0x0493, 0x00081), (0x0494, 0x00801), (0x0495, 0x00081),
    (0x0496, 0x00801), (0x0497, 0x00081), (0x0498, 0x00801), (0x0499, 0x00081), (0x049A, 0x00801), (0x049B, 0x00081),
    (0x049C, 0x00801), (0x049D, 0x00081), (0x049E, 0x00801), (0x049F, 0x00081), (0x04A0, 0x00801), (0x04A1, 0x00081),
    (0x04A2, 0x00801), (0x04A3, 0x00081), (0x04A4, 0x00801), (0x04A5, 0x00081), (0x04A6, 0x00801), (0x04A7, 0x00081),
    (0x04A8, 0x00801), (0x04A9, 0x00081), (0x04AA, 0x00801), (0x04AB, 0x00081), (0x04AC, 0x00801), (0x04AD, 0x00081),
    (0x04AE, 0x00801), (0x04AF, 0x00081), (0x04B0, 0x00801), (0x04B1, 0x00081), (0x04B2, 0x00801), (0x04B3, 0x00081),
    (0x04B4, 0x00801), (0x04B5, 0x00081), (0x04B6, 0x00801), (0x04B7, 0x00081), (0x04B8, 0x00801), (0x04B9, 0x00081),
    (0x04BA, 0x00801), (0x04BB, 0x00081), (0x04BC, 0x00801), (0x04BD, 0x00081), (0x04BE, 0x00801), (0x04BF, 0x00081),
    (0x04C0, 0x00801), (0x04C2, 0x00081), (0x04C3, 0x00801), (0x04C4, 0x00081), (0x04C5, 0x00801), (0x04C6, 0x00081),
    (0x04C7, 0x00801), (0x04C8, 0x00081), (0x04C9, 0x00801), (0x04CA, 0x00081), (0x04CB, 0x00801), (0x04CC, 0x00081),
    (0x04CD, 0x00801), (0x04CE, 0x00081), (0x04D0, 0x00801), (0x04D1, 0x00081), (0x04D2, 0x00801), (0x04D3, 0x00081),
    (0x04D4, 0x00801), (0x04D5, 0x00081), (0x04D6, 0x00801), (0x04D7, 0x00081), (0x04D8, 0x00801), (0x04D9, 0x00081),
    (0x04DA, 0x00801), (0x04DB, 0x00081), (0x04DC, 0x00801), (0x04DD, 0x00081), (0x04DE, 0x00801), (0x04DF, 0x00081),
    (0x04E0, 0x00801), (0x04E1, 0x00081), (0x04E2, 0x00801), (0x04E3, 0x00081), (0x04E4, 0x00801), (0x04E5, 0x00081),
    (0x04E6, 0x00801), (0x04E7, 0x00081), (0x04E8, 0x00801), (0x04E9, 0x00081), (0x04EA, 0x00801), (0x04EB, 0x00081),
    (0x04EC, 0x00801), (0x04ED, 0x00081), (0x04EE, 0x00801), (0x04EF, 0x00081), (0x04F0, 0x00801), (0x04F1, 0x00081),
    (0x04F2, 0x00801), (0x04F3, 0x00081), (0x04F4, 0x00801), (0x04F5, 0x00081), (0x04F6, 0x00801), (0x04F7, 0x00081),
    (0x04F8, 0x00801), (0x04F9, 0x00081), (0x04FA, 0x00801), (0x04FB, 0x00081), (0x04FC, 0x00801), (0x04FD, 0x00081),
    (0x04FE, 0x00801), (0x04FF, 0x00081), (0x0500, 0x00801), (0x0501, 0x00081), (0x0502, 0x00801), (0x0503, 0x00081),
    (0x0504, 0x00801), (0x0505, 0x00081), (0x0506, 0x00801), (0x0507, 0x00081), (0x0508, 0x00801), (0x0509, 0x00081),
    (0x050A, 0x00801), (0x050B, 0x00081), (0x050C, 0x00801), (0x050D, 0x00081), (0x050E, 0x00801), (0x050F, 0x00081),
    (0x0510, 0x00801), (0x0511, 0x00081), (0x0512, 0x00801), (0x0513, 0x00081), (0x0514, 0x00801), (0x0515, 0x00081),
    (0x0516, 0x00801), (0x0517, 0x00081), (0x0518, 0x00801), (0x0519, 0x00081), (0x051A, 0x00801), (0x051B, 0x00081),
    (0x051C, 0x00801), (0x051D, 0x00081), (0x051E, 0x00801), (0x051F, 0x00081), (0x0520, 0x00801), (0x0521, 0x00081),
    (0x0522, 0x00801), (0x0523, 0x00081), (0x0524, 0x00801), (0x0525, 0x00081), (0x0526, 0x00801), (0x0527, 0x00081),
    (0x0528, 0x00801), (0x0529, 0x00081), (0x052A, 0x00801), (0x052B, 0x00081), (0x052C, 0x00801), (0x052D, 0x00081),
    (0x052E, 0x00801), (0x052F, 0x00081), (0x0530, 0x00208), (0x0531, 0x00801), (0x0557, 0x00208), (0x0559, 0x00101),
    (0x055A, 0x02010), (0x0560, 0x00081), (0x0589, 0x02010), (0x058A, 0x00210), (0x058B, 0x00208), (0x058D, 0x00440),
    (0x058F, 0x000C0), (0x0590, 0x00208), (0x0591, 0x00102), (0x05BE, 0x00210), (0x05BF, 0x00102), (0x05C0, 0x02010),
    (0x05C1, 0x00102), (0x05C3, 0x02010), (0x05C4, 0x00102), (0x05C6, 0x02010), (0x05C7, 0x00102), (0x05C8, 0x00208),
    (0x05D0, 0x00201), (0x05EB, 0x00208), (0x05EF, 0x00201), (0x05F3, 0x02010), (0x05F5, 0x00208), (0x0600, 0x00108),
    (0x0606, 0x00140), (0x0609, 0x02010), (0x060B, 0x000C0), (0x060C, 0x02010), (0x060E, 0x00440), (0x0610, 0x00102),
    (0x061B, 0x02010), (0x061C, 0x00108), (0x061D, 0x02010), (0x0620, 0x00201), (0x0640, 0x00101), (0x0641, 0x00201),
    (0x064B, 0x00102), (0x0660, 0x00084), (0x066A, 0x02010), (0x066E, 0x00201), (0x0670, 0x00102), (0x0671, 0x00201),
    (0x06D4, 0x02010), (0x06D5, 0x00201), (0x06D6, 0x00102), (0x06DD, 0x00108), (0x06DE, 0x00440), (0x06DF, 0x00102),
    (0x06E5, 0x00101), (0x06E7, 0x00102), (0x06E9, 0x00440), (0x06EA, 0x00102), (0x06EE, 0x00201), (0x06F0, 0x00084),
    (0x06FA, 0x00201), (0x06FD, 0x00440), (0x06FF, 0x00201), (0x0700, 0x02010), (0x070E, 0x00208), (0x070F, 0x00108),
    (0x0710, 0x00201), (0x0711, 0x00102), (0x0712, 0x00201), (0x0730, 0x00102), (0x074B, 0x00208), (0x074D, 0x00201),
    (0x07A6, 0x00102), (0x07B1, 0x00201), (0x07B2, 0x00208), (0x07C0, 0x00084), (0x07CA, 0x00201), (0x07EB, 0x00102),
    (0x07F4, 0x00101), (0x07F6, 0x00440), (0x07F7, 0x02010), (0x07FA, 0x00101), (0x07FB, 0x00208), (0x07FD, 0x00102),
    (0x07FE, 0x000C0), (0x0800, 0x00201), (0x0816, 0x00102), (0x081A, 0x00101), (0x081B, 0x00102), (0x0824, 0x00101),
    (0x0825, 0x00102), (0x0828, 0x00101), (0x0829, 0x00102), (0x082E, 0x00208), (0x0830, 0x02010), (0x083F, 0x00208),
    (0x0840, 0x00201), (0x0859, 0x00102), (0x085C, 0x00208), (0x085E, 0x02010), (0x085F, 0x00208), (0x0860, 0x00201),
    (0x086B, 0x00208), (0x0870, 0x00201), (0x0888, 0x00240), (0x0889, 0x00201), (0x088F, 0x00208), (0x0890, 0x00108),
    (0x0892, 0x00208), (0x0898, 0x00102), (0x08A0, 0x00201), (0x08C9, 0x00101), (0x08CA, 0x00102), (0x08E2, 0x00108),
    (0x08E3, 0x00102), (0x0903, 0x00202), (0x0904, 0x00201), (0x093A, 0x00102), (0x093B, 0x00202), (0x093C, 0x00102),
    (0x093D, 0x00201), (0x093E, 0x00202), (0x0941, 0x00102), (0x0949, 0x00202), (0x094D, 0x00102), (0x094E, 0x00202),
    (0x0950, 0x00201), (0x0951, 0x00102), (0x0958, 0x00201), (0x0962, 0x00102), (0x0964, 0x02010), (0x0966, 0x00084),
    (0x0970, 0x02010), (0x0971, 0x00101), (0x0972, 0x00201), (0x0981, 0x00102), (0x0982, 0x00202), (0x0984, 0x00208),
    (0x0985, 0x00201), (0x098D, 0x00208), (0x098F, 0x00201), (0x0991, 0x00208), (0x0993, 0x00201), (0x09A9, 0x00208),
    (0x09AA, 0x00201), (0x09B1, 0x00208), (0x09B2, 0x00201), (0x09B3, 0x00208), (0x09B6, 0x00201), (0x09BA, 0x00208),
    (0x09BC, 0x00102), (0x09BD, 0x00201), (0x09BE, 0x00202), (0x09C1, 0x00102), (0x09C5, 0x00208), (0x09C7, 0x00202),
    (0x09C9, 0x00208), (0x09CB, 0x00202), (0x09CD, 0x00102), (0x09CE, 0x00201), (0x09CF, 0x00208), (0x09D7, 0x00202),
    (0x09D8, 0x00208), (0x09DC, 0x00201), (0x09DE, 0x00208), (0x09DF, 0x00201), (0x09E2, 0x00102), (0x09E4, 0x00208),
    (0x09E6, 0x00084), (0x09F0, 0x00201), (0x09F2, 0x000C0), (0x09F4, 0x00204), (0x09FA, 0x00440), (0x09FB, 0x000C0),
    (0x09FC, 0x00201), (0x09FD, 0x02010), (0x09FE, 0x00102), (0x09FF, 0x00208), (0x0A01, 0x00102), (0x0A03, 0x00202),
    (0x0A04, 0x00208), (0x0A05, 0x00201), (0x0A0B, 0x00208), (0x0A0F, 0x00201), (0x0A11, 0x00208), (0x0A13, 0x00201),
    (0x0A29, 0x00208), (0x0A2A, 0x00201), (0x0A31, 0x00208), (0x0A32, 0x00201), (0x0A34, 0x00208), (0x0A35, 0x00201),
    (0x0A37, 0x00208), (0x0A38, 0x00201), (0x0A3A, 0x00208), (0x0A3C, 0x00102), (0x0A3D, 0x00208), (0x0A3E, 0x00202),
    (0x0A41, 0x00102), (0x0A43, 0x00208), (0x0A47, 0x00102), (0x0A49, 0x00208), (0x0A4B, 0x00102), (0x0A4E, 0x00208),
    (0x0A51, 0x00102), (0x0A52, 0x00208), (0x0A59, 0x00201), (0x0A5D, 0x00208), (0x0A5E, 0x00201), (0x0A5F, 0x00208),
    (0x0A66, 0x00084), (0x0A70, 0x00102), (0x0A72, 0x00201), (0x0A75, 0x00102), (0x0A76, 0x02010), (0x0A77, 0x00208),
    (0x0A81, 0x00102), (0x0A83, 0x00202), (0x0A84, 0x00208), (0x0A85, 0x00201), (0x0A8E, 0x00208), (0x0A8F, 0x00201),
    (0x0A92, 0x00208), (0x0A93, 0x00201), (0x0AA9, 0x00208), (0x0AAA, 0x00201), (0x0AB1, 0x00208), (0x0AB2, 0x00201),
    (0x0AB4, 0x00208), (0x0AB5, 0x00201), (0x0ABA, 0x00208), (0x0ABC, 0x00102), (0x0ABD, 0x00201), (0x0ABE, 0x00202),
    (0x0AC1, 0x00102), (0x0AC6, 0x00208), (0x0AC7, 0x00102), (0x0AC9, 0x00202), (0x0ACA, 0x00208), (0x0ACB, 0x00202),
    (0x0ACD, 0x00102), (0x0ACE, 0x00208), (0x0AD0, 0x00201), (0x0AD1, 0x00208), (0x0AE0, 0x00201), (0x0AE2, 0x00102),
    (0x0AE4, 0x00208), (0x0AE6, 0x00084), (0x0AF0, 0x02010), (0x0AF1, 0x000C0), (0x0AF2, 0x00208), (0x0AF9, 0x00201),
    (0x0AFA, 0x00102), (0x0B00, 0x00208), (0x0B01, 0x00102), (0x0B02, 0x00202), (0x0B04, 0x00208), (0x0B05, 0x00201),
    (0x0B0D, 0x00208), (0x0B0F, 0x00201), (0x0B11, 0x00208), (0x0B13, 0x00201), (0x0B29, 0x00208), (0x0B2A, 0x00201),
    (0x0B31, 0x00208), (0x0B32, 0x00201), (0x0B34, 0x00208), (0x0B35, 0x00201), (0x0B3A, 0x00208), (0x0B3C, 0x00102),
    (0x0B3D, 0x00201), (0x0B3E, 0x00202), (0x0B3F, 0x00102), (0x0B40, 0x00202), (0x0B41, 0x00102), (0x0B45, 0x00208),
    (0x0B47, 0x00202), (0x0B49, 0x00208), (0x0B4B, 0x00202), (0x0B4D, 0x00102), (0x0B4E, 0x00208), (0x0B55, 0x00102),
    (0x0B57, 0x00202), (0x0B58, 0x00208), (0x0B5C, 0x00201), (0x0B5E, 0x00208), (0x0B5F, 0x00201), (0x0B62, 0x00102),
    (0x0B64, 0x00208), (0x0B66, 0x00084), (0x0B70, 0x00440), (0x0B71, 0x00201), (0x0B72, 0x00204), (0x0B78, 0x00208),
    (0x0B82, 0x00102), (0x0B83, 0x00201), (0x0B84, 0x00208), (0x0B85, 0x00201), (0x0B8B, 0x00208), (0x0B8E, 0x00201),
    (0x0B91, 0x00208), (0x0B92, 0x00201), (0x0B96, 0x00208), (0x0B99, 0x00201), (0x0B9B, 0x00208), (0x0B9C, 0x00201),
    (0x0B9D, 0x00208), (0x0B9E, 0x00201), (0x0BA0, 0x00208), (0x0BA3, 0x00201), (0x0BA5, 0x00208), (0x0BA8, 0x00201),
    (0x0BAB, 0x00208), (0x0BAE, 0x00201), (0x0BBA, 0x00208), (0x0BBE, 0x00202), (0x0BC0, 0x00102), (0x0BC1, 0x00202),
    (0x0BC3, 0x00208), (0x0BC6, 0x00202), (0x0BC9, 0x00208), (0x0BCA, 0x00202), (0x0BCD, 0x00102), (0x0BCE, 0x00208),
    (0x0BD0, 0x00201), (0x0BD1, 0x00208), (0x0BD7, 0x00202), (0x0BD8, 0x00208), (0x0BE6, 0x00084), (0x0BF0, 0x00204),
    (0x0BF3, 0x00440), (0x0BF9, 0x000C0), (0x0BFA, 0x00440), (0x0BFB, 0x00208), (0x0C00, 0x00102), (0x0C01, 0x00202),
    (0x0C04, 0x00102), (0x0C05, 0x00201), (0x0C0D, 0x00208), (0x0C0E, 0x00201), (0x0C11, 0x00208), (0x0C12, 0x00201),
    (0x0C29, 0x00208), (0x0C2A, 0x00201), (0x0C3A, 0x00208), (0x0C3C, 0x00102), (0x0C3D, 0x00201), (0x0C3E, 0x00102),
    (0x0C41, 0x00202), (0x0C45, 0x00208), (0x0C46, 0x00102), (0x0C49, 0x00208), (0x0C4A, 0x00102), (0x0C4E, 0x00208),
    (0x0C55, 0x00102), (0x0C57, 0x00208), (0x0C58, 0x00201), (0x0C5B, 0x00208), (0x0C5D, 0x00201), (0x0C5E, 0x00208),
    (0x0C60, 0x00201), (0x0C62, 0x00102), (0x0C64, 0x00208), (0x0C66, 0x00084), (0x0C70, 0x00208), (0x0C77, 0x02010),
    (0x0C78, 0x00204), (0x0C7F, 0x00440), (0x0C80, 0x00201), (0x0C81, 0x00102), (0x0C82, 0x00202), (0x0C84, 0x02010),
    (0x0C85, 0x00201), (0x0C8D, 0x00208), (0x0C8E, 0x00201), (0x0C91, 0x00208), (0x0C92, 0x00201), (0x0CA9, 0x00208),
    (0x0CAA, 0x00201), (0x0CB4, 0x00208), (0x0CB5, 0x00201), (0x0CBA, 0x00208), (0x0CBC, 0x00102), (0x0CBD, 0x00201),
    (0x0CBE, 0x00202), (0x0CBF, 0x00102), (0x0CC0, 0x00202), (0x0CC5, 0x00208), (0x0CC6, 0x00102), (0x0CC7, 0x00202),
    (0x0CC9, 0x00208), (0x0CCA, 0x00202), (0x0CCC, 0x00102), (0x0CCE, 0x00208), (0x0CD5, 0x00202), (0x0CD7, 0x00208),
    (0x0CDD, 0x00201), (0x0CDF, 0x00208), (0x0CE0, 0x00201), (0x0CE2, 0x00102), (0x0CE4, 0x00208), (0x0CE6, 0x00084),
    (0x0CF0, 0x00208), (0x0CF1, 0x00201), (0x0CF3, 0x00202), (0x0CF4, 0x00208), (0x0D00, 0x00102), (0x0D02, 0x00202),
    (0x0D04, 0x00201), (0x0D0D, 0x00208), (0x0D0E, 0x00201), (0x0D11, 0x00208), (0x0D12, 0x00201), (0x0D3B, 0x00102),
    (0x0D3D, 0x00201), (0x0D3E, 0x00202), (0x0D41, 0x00102), (0x0D45, 0x00208), (0x0D46, 0x00202), (0x0D49, 0x00208),
    (0x0D4A, 0x00202), (0x0D4D, 0x00102), (0x0D4E, 0x00201), (0x0D4F, 0x00440), (0x0D50, 0x00208), (0x0D54, 0x00201),
    (0x0D57, 0x00202), (0x0D58, 0x00204), (0x0D5F, 0x00201), (0x0D62, 0x00102), (0x0D64, 0x00208), (0x0D66, 0x00084),
    (0x0D70, 0x00204), (0x0D79, 0x00440), (0x0D7A, 0x00201), (0x0D80, 0x00208), (0x0D81, 0x00102), (0x0D82, 0x00202),
    (0x0D84, 0x00208), (0x0D85, 0x00201), (0x0D97, 0x00208), (0x0D9A, 0x00201), (0x0DB2, 0x00208), (0x0DB3, 0x00201),
    (0x0DBC, 0x00208), (0x0DBD, 0x00201), (0x0DBE, 0x00208), (0x0DC0, 0x00201), (0x0DC7, 0x00208), (0x0DCA, 0x00102),
    (0x0DCB, 0x00208), (0x0DCF, 0x00202), (0x0DD2, 0x00102), (0x0DD5, 0x00208), (0x0DD6, 0x00102), (0x0DD7, 0x00208),
    (0x0DD8, 0x00202), (0x0DE0, 0x00208), (0x0DE6, 0x00084), (0x0DF0, 0x00208), (0x0DF2, 0x00202), (0x0DF4, 0x02010),
    (0x0DF5, 0x00208), (0x0E01, 0x00201), (0x0E31, 0x00102), (0x0E32, 0x00201), (0x0E34, 0x00102), (0x0E3B, 0x00208),
    (0x0E3F, 0x000C0), (0x0E40, 0x00201), (0x0E46, 0x00101), (0x0E47, 0x00102), (0x0E4F, 0x02010), (0x0E50, 0x00084),
    (0x0E5A, 0x02010), (0x0E5C, 0x00208), (0x0E81, 0x00201), (0x0E83, 0x00208), (0x0E84, 0x00201), (0x0E85, 0x00208),
    (0x0E86, 0x00201), (0x0E8B, 0x00208), (0x0E8C, 0x00201), (0x0EA4, 0x00208), (0x0EA5, 0x00201), (0x0EA6, 0x00208),
    (0x0EA7, 0x00201), (0x0EB1, 0x00102), (0x0EB2, 0x00201), (0x0EB4, 0x00102), (0x0EBD, 0x00201), (0x0EBE, 0x00208),
    (0x0EC0, 0x00201), (0x0EC5, 0x00208), (0x0EC6, 0x00101), (0x0EC7, 0x00208), (0x0EC8, 0x00102), (0x0ECF, 0x00208),
    (0x0ED0, 0x00084), (0x0EDA, 0x00208), (0x0EDC, 0x00201), (0x0EE0, 0x00208), (0x0F00, 0x00201), (0x0F01, 0x00440),
    (0x0F04, 0x02010), (0x0F13, 0x00440), (0x0F14, 0x02010), (0x0F15, 0x00440), (0x0F18, 0x00102), (0x0F1A, 0x00440),
    (0x0F20, 0x00084), (0x0F2A, 0x00204), (0x0F34, 0x00440), (0x0F35, 0x00102), (0x0F36, 0x00440), (0x0F37, 0x00102),
    (0x0F38, 0x00440), (0x0F39, 0x00102), (0x0F3A, 0x01010), (0x0F3B, 0x00090), (0x0F3C, 0x01010), (0x0F3D, 0x00090),
    (0x0F3E, 0x00202), (0x0F40, 0x00201), (0x0F48, 0x00208), (0x0F49, 0x00201), (0x0F6D, 0x00208), (0x0F71, 0x00102),
    (0x0F7F, 0x00202), (0x0F80, 0x00102), (0x0F85, 0x02010), (0x0F86, 0x00102), (0x0F88, 0x00201), (0x0F8D, 0x00102),
    (0x0F98, 0x00208), (0x0F99, 0x00102), (0x0FBD, 0x00208), (0x0FBE, 0x00440), (0x0FC6, 0x00102), (0x0FC7, 0x00440),
    (0x0FCD, 0x00208), (0x0FCE, 0x00440), (0x0FD0, 0x02010), (0x0FD5, 0x00440), (0x0FD9, 0x02010), (0x0FDB, 0x00208),
    (0x1000, 0x00201), (0x102B, 0x00202), (0x102D, 0x00102), (0x1031, 0x00202), (0x1032, 0x00102), (0x1038, 0x00202),
    (0x1039, 0x00102), (0x103B, 0x00202), (0x103D, 0x00102), (0x103F, 0x00201), (0x1040, 0x00084), (0x104A, 0x02010),
    (0x1050, 0x00201), (0x1056, 0x00202), (0x1058, 0x00102), (0x105A, 0x00201), (0x105E, 0x00102), (0x1061, 0x00201),
    (0x1062, 0x00202), (0x1065, 0x00201), (0x1067, 0x00202), (0x106E, 0x00201), (0x1071, 0x00102), (0x1075, 0x00201),
    (0x1082, 0x00102), (0x1083, 0x00202), (0x1085, 0x00102), (0x1087, 0x00202), (0x108D, 0x00102), (0x108E, 0x00201),
    (0x108F, 0x00202), (0x1090, 0x00084), (0x109A, 0x00202), (0x109D, 0x00102), (0x109E, 0x00440), (0x10A0, 0x00801),
    (0x10C6, 0x00208), (0x10C7, 0x00801), (0x10C8, 0x00208), (0x10CD, 0x00801), (0x10CE, 0x00208), (0x10D0, 0x00081),
    (0x10FB, 0x02010), (0x10FC, 0x00101), (0x10FD, 0x00081), (0x1100, 0x10201), (0x1160, 0x00201), (0x1249, 0x00208),
    (0x124A, 0x00201), (0x124E, 0x00208), (0x1250, 0x00201), (0x1257, 0x00208), (0x1258, 0x00201), (0x1259, 0x00208),
    (0x125A, 0x00201), (0x125E, 0x00208), (0x1260, 0x00201), (0x1289, 0x00208), (0x128A, 0x00201), (0x128E, 0x00208),
    (0x1290, 0x00201), (0x12B1, 0x00208), (0x12B2, 0x00201), (0x12B6, 0x00208), (0x12B8, 0x00201), (0x12BF, 0x00208),
    (0x12C0, 0x00201), (0x12C1, 0x00208), (0x12C2, 0x00201), (0x12C6, 0x00208), (0x12C8, 0x00201), (0x12D7, 0x00208),
    (0x12D8, 0x00201), (0x1311, 0x00208), (0x1312, 0x00201), (0x1316, 0x00208), (0x1318, 0x00201), (0x135B, 0x00208),
    (0x135D, 0x00102), (0x1360, 0x02010), (0x1369, 0x00204), (0x137D, 0x00208), (0x1380, 0x00201), (0x1390, 0x00440),
    (0x139A, 0x00208), (0x13A0, 0x00801), (0x13F6, 0x00208), (0x13F8, 0x00081), (0x13FE, 0x00208), (0x1400, 0x00210),
    (0x1401, 0x00201), (0x166D, 0x00440), (0x166E, 0x02010), (0x166F, 0x00201), (0x1680, 0x00220), (0x1681, 0x00201),
    (0x169B, 0x01010), (0x169C, 0x00090), (0x169D, 0x00208), (0x16A0, 0x00201), (0x16EB, 0x02010), (0x16EE, 0x00104),
    (0x16F1, 0x00201), (0x16F9, 0x00208), (0x1700, 0x00201), (0x1712, 0x00102), (0x1715, 0x00202), (0x1716, 0x00208),
    (0x171F, 0x00201), (0x1732, 0x00102), (0x1734, 0x00202), (0x1735, 0x02010), (0x1737, 0x00208), (0x1740, 0x00201),
    (0x1752, 0x00102), (0x1754, 0x00208), (0x1760, 0x00201), (0x176D, 0x00208), (0x176E, 0x00201), (0x1771, 0x00208),
    (0x1772, 0x00102), (0x1774, 0x00208), (0x1780, 0x00201), (0x17B4, 0x00102), (0x17B6, 0x00202), (0x17B7, 0x00102),
    (0x17BE, 0x00202), (0x17C6, 0x00102), (0x17C7, 0x00202), (0x17C9, 0x00102), (0x17D4, 0x02010), (0x17D7, 0x00101),
    (0x17D8, 0x02010), (0x17DB, 0x000C0), (0x17DC, 0x00201), (0x17DD, 0x00102), (0x17DE, 0x00208), (0x17E0, 0x00084),
    (0x17EA, 0x00208), (0x17F0, 0x00204), (0x17FA, 0x00208), (0x1800, 0x02010), (0x1806, 0x00210), (0x1807, 0x02010),
    (0x180B, 0x00102), (0x180E, 0x00108), (0x180F, 0x00102), (0x1810, 0x00084), (0x181A, 0x00208), (0x1820, 0x00201),
    (0x1843, 0x00101), (0x1844, 0x00201), (0x1879, 0x00208), (0x1880, 0x00201), (0x1885, 0x00102), (0x1887, 0x00201),
    (0x18A9, 0x00102), (0x18AA, 0x00201), (0x18AB, 0x00208), (0x18B0, 0x00201), (0x18F6, 0x00208), (0x1900, 0x00201),
    (0x191F, 0x00208), (0x1920, 0x00102), (0x1923, 0x00202), (0x1927, 0x00102), (0x1929, 0x00202), (0x192C, 0x00208),
    (0x1930, 0x00202), (0x1932, 0x00102), (0x1933, 0x00202), (0x1939, 0x00102), (0x193C, 0x00208), (0x1940, 0x00440),
    (0x1941, 0x00208), (0x1944, 0x02010), (0x1946, 0x00084), (0x1950, 0x00201), (0x196E, 0x00208), (0x1970, 0x00201),
    (0x1975, 0x00208), (0x1980, 0x00201), (0x19AC, 0x00208), (0x19B0, 0x00201), (0x19CA, 0x00208), (0x19D0, 0x00084),
    (0x19DA, 0x00204), (0x19DB, 0x00208), (0x19DE, 0x00440), (0x1A00, 0x00201), (0x1A17, 0x00102), (0x1A19, 0x00202),
    (0x1A1B, 0x00102), (0x1A1C, 0x00208), (0x1A1E, 0x02010), (0x1A20, 0x00201), (0x1A55, 0x00202), (0x1A56, 0x00102),
    (0x1A57, 0x00202), (0x1A58, 0x00102), (0x1A5F, 0x00208), (0x1A60, 0x00102), (0x1A61, 0x00202), (0x1A62, 0x00102),
    (0x1A63, 0x00202), (0x1A65, 0x00102), (0x1A6D, 0x00202), (0x1A73, 0x00102), (0x1A7D, 0x00208), (0x1A7F, 0x00102),
    (0x1A80, 0x00084), (0x1A8A, 0x00208), (0x1A90, 0x00084), (0x1A9A, 0x00208), (0x1AA0, 0x02010), (0x1AA7, 0x00101),
    (0x1AA8, 0x02010), (0x1AAE, 0x00208), (0x1AB0, 0x00102), (0x1ABE, 0x00082), (0x1ABF, 0x00102), (0x1ACF, 0x00208),
    (0x1B00, 0x00102), (0x1B04, 0x00202), (0x1B05, 0x00201), (0x1B34, 0x00102), (0x1B35, 0x00202), (0x1B36, 0x00102),
    (0x1B3B, 0x00202), (0x1B3C, 0x00102), (0x1B3D, 0x00202), (0x1B42, 0x00102), (0x1B43, 0x00202), (0x1B45, 0x00201),
    (0x1B4D, 0x00208), (0x1B50, 0x00084), (0x1B5A, 0x02010), (0x1B61, 0x00440), (0x1B6B, 0x00102), (0x1B74, 0x00440),
    (0x1B7D, 0x02010), (0x1B7F, 0x00208), (0x1B80, 0x00102), (0x1B82, 0x00202), (0x1B83, 0x00201), (0x1BA1, 0x00202),
    (0x1BA2, 0x00102), (0x1BA6, 0x00202), (0x1BA8, 0x00102), (0x1BAA, 0x00202), (0x1BAB, 0x00102), (0x1BAE, 0x00201),
    (0x1BB0, 0x00084), (0x1BBA, 0x00201), (0x1BE6, 0x00102), (0x1BE7, 0x00202), (0x1BE8, 0x00102), (0x1BEA, 0x00202),
    (0x1BED, 0x00102), (0x1BEE, 0x00202), (0x1BEF, 0x00102), (0x1BF2, 0x00202), (0x1BF4, 0x00208), (0x1BFC, 0x02010),
    (0x1C00, 0x00201), (0x1C24, 0x00202), (0x1C2C, 0x00102), (0x1C34, 0x00202), (0x1C36, 0x00102), (0x1C38, 0x00208),
    (0x1C3B, 0x02010), (0x1C40, 0x00084), (0x1C4A, 0x00208), (0x1C4D, 0x00201), (0x1C50, 0x00084), (0x1C5A, 0x00201),
    (0x1C78, 0x00101), (0x1C7E, 0x02010), (0x1C80, 0x00081), (0x1C89, 0x00208), (0x1C90, 0x00801), (0x1CBB, 0x00208),
    (0x1CBD, 0x00801), (0x1CC0, 0x02010), (0x1CC8, 0x00208), (0x1CD0, 0x00102), (0x1CD3, 0x02010), (0x1CD4, 0x00102),
    (0x1CE1, 0x00202), (0x1CE2, 0x00102), (0x1CE9, 0x00201), (0x1CED, 0x00102), (0x1CEE, 0x00201), (0x1CF4, 0x00102),
    (0x1CF5, 0x00201), (0x1CF7, 0x00202), (0x1CF8, 0x00102), (0x1CFA, 0x00201), (0x1CFB, 0x00208), (0x1D00, 0x00081),
    (0x1D2C, 0x00101), (0x1D6B, 0x00081), (0x1D78, 0x00101), (0x1D79, 0x00081), (0x1D9B, 0x00101), (0x1DC0, 0x00102),
    (0x1E00, 0x00801), (0x1E01, 0x00081), (0x1E02, 0x00801), (0x1E03, 0x00081), (0x1E04, 0x00801), (0x1E05, 0x00081),
    (0x1E06, 0x00801), (0x1E07, 0x00081), (0x1E08, 0x00801), (0x1E09, 0x00081), (0x1E0A, 0x00801), (0x1E0B, 0x00081),
    (0x1E0C, 0x00801), (0x1E0D, 0x00081), (0x1E0E, 0x00801), (0x1E0F, 0x00081), (0x1E10, 0x00801), (0x1E11, 0x00081),
    (0x1E12, 0x00801), (0x1E13, 0x00081), (0x1E14, 0x00801), (0x1E15, 0x00081), (0x1E16, 0x00801), (0x1E17, 0x00081),
    (0x1E18, 0x00801), (0x1E19, 0x00081), (0x1E1A, 0x00801), (0x1E1B, 0x00081), (0x1E1C, 0x00801), (0x1E1D, 0x00081),
    (0x1E1E, 0x00801), (0x1E1F, 0x00081), (0x1E20, 0x00801), (0x1E21, 0x00081), (0x1E22, 0x00801), (0x1E23, 0x00081),
    (0x1E24, 0x00801), (0x1E25, 0x00081), (0x1E26, 0x00801), (0x1E27, 0x00081), (0x1E28, 0x00801), (0x1E29, 0x00081),
    (0x1E2A, 0x00801), (0x1E2B, 0x00081), (0x1E2C, 0x00801), (0x1E2D, 0x00081), (0x1E2E, 0x00801), (0x1E2F, 0x00081),
    (0x1E30, 0x00801), (0x1E31, 0x00081), (0x1E32, 0x00801), (0x1E33, 0x00081), (0x1E34, 0x00801), (0x1E35, 0x00081),
    (0x1E36, 0x00801), (0x1E37, 0x00081), (0x1E38, 0x00801), (0x1E39, 0x00081), (0x1E3A, 0x00801), (0x1E3B, 0x00081),
    (0x1E3C, 0x00801), (0x1E3D, 0x00081), (0x1E3E, 0x00801), (0x1E3F, 0x00081), (0x1E40, 0x00801), (0x1E41, 0x00081),
    (0x1E42, 0x00801), (0x1E43, 0x00081), (0x1E44, 0x00801), (0x1E45, 0x00081), (0x1E46, 0x00801), (0x1E47, 0x00081),
    (0x1E48, 0x00801), (0x1E49, 0x00081), (0x1E4A, 0x00801), (0x1E4B, 0x00081), (0x1E4C, 0x00801), (0x1E4D, 0x00081),
    (0x1E4E, 0x00801), (0x1E4F, 0x00081), (0x1E50, 0x00801), (0x1E51, 0x00081), (0x1E52, 0x00801), (0x1E53, 0x00081),
    (0x1E54, 0x00801), (0x1E55, 0x00081), (0x1E56, 0x00801), (0x1E57, 0x00081), (0x1E58, 0x00801), (0x1E59, 0x00081),
    (0x1E5A, 0x00801), (0x1E5B, 0x00081), (0x1E5C, 0x00801), (0x1E5D, 0x00081), (0x1E5E, 0x00801), (0x1E5F, 0x00081),
    (0x1E60, 0x00801), (0x1E61, 0x00081), (0x1E62, 0x00801), (0x1E63, 0x00081), (0x1E64, 0x00801), (0x1E65, 0x00081),
    (0x1E66, 0x00801), (0x1E67, 0x00081), (0x1E68, 0x00801), (0x1E69, 0x00081), (0x1E6A, 0x00801), (0x1E6B, 0x00081),
    (0x1E6C, 0x00801), (0x1E6D, 0x00081), (0x1E6E, 0x00801), (0x1E6F, 0x00081), (0x1E70, 0x00801), (0x1E71, 0x00081),
    (0x1E72, 0x00801), (0x1E73, 0x00081), (0x1E74, 0x00801), (0x1E75, 0x00081), (0x1E76, 0x00801), (0x1E77, 0x00081),
    (0x1E78, 0x00801), (0x1E79, 0x00081), (0x1E7A, 0x00801), (0x1E7B, 0x00081), (0x1E7C, 0x00801), (0x1E7D, 0x00081),
    (0x1E7E, 0x00801), (0x1E7F, 0x00081), (0x1E80, 0x00801), (0x1E81, 0x00081), (0x1E82, 0x00801), (0x1E83, 0x00081),
    (0x1E84, 0x00801), (0x1E85, 0x00081), (0x1E86, 0x00801), (0x1E87, 0x00081), (0x1E88, 0x00801), (0x1E89, 0x00081),
    (0x1E8A, 0x00801), (0x1E8B, 0x00081), (0x1E8C, 0x00801), (0x1E8D, 0x00081), (0x1E8E, 0x00801), (0x1E8F, 0x00081),
    (0x1E90, 0x00801), (0x1E91, 0x00081), (0x1E92, 0x00801), (0x1E93, 0x00081), (0x1E94, 0x00801), (0x1E95, 0x00081),
    (0x1E9E, 0x00801), (0x1E9F, 0x00081), (0x1EA0, 0x00801), (0x1EA1, 0x00081), (0x1EA2, 0x00801), (0x1EA3, 0x00081),
    (0x1EA4, 0x00801), (0x1EA5, 0x00081), (0x1EA6, 0x00801), (0x1EA7, 0x00081), (0x1EA8, 0x00801), (0x1EA9, 0x00081),
    (0x1EAA, 0x00801), (0x1EAB, 0x00081), (0x1EAC, 0x00801), (0x1EAD, 0x00081), (0x1EAE, 0x00801), (0x1EAF, 0x00081),
    (0x1EB0, 0x00801), (0x1EB1, 0x00081), (0x1EB2, 0x00801), (0x1EB3, 0x00081), (0x1EB4, 0x00801), (0x1EB5, 0x00081),
    (0x1EB6, 0x00801), (0x1EB7, 0x00081), (0x1EB8, 0x00801), (0x1EB9, 0x00081), (0x1EBA, 0x00801), (0x1EBB, 0x00081),
    (0x1EBC, 0x00801), (0x1EBD, 0x00081), (0x1EBE, 0x00801), (0x1EBF, 0x00081), (0x1EC0, 0x00801), (0x1EC1, 0x00081),
    (0x1EC2, 0x00801), (0x1EC3, 0x00081), (0x1EC4, 0x00801), (0x1EC5, 0x00081), (0x1EC6, 0x00801), (0x1EC7, 0x00081),
    (0x1EC8, 0x00801), (0x1EC9, 0x00081), (0x1ECA, 0x00801), (0x1ECB, 0x00081), (0x1ECC, 0x00801), (0x1ECD, 0x00081),
    (0x1ECE, 0x00801), (0x1ECF, 0x00081), (0x1ED0, 0x00801), (0x1ED1, 0x00081), (0x1ED2, 0x00801), (0x1ED3, 0x00081),
    (0x1ED4, 0x00801), (0x1ED5, 0x00081), (0x1ED6, 0x00801), (0x1ED7, 0x00081), (0x1ED8, 0x00801), (0x1ED9, 0x00081),
    (0x1EDA, 0x00801), (0x1EDB, 0x00081), (0x1EDC, 0x00801), (0x1EDD, 0x00081), (0x1EDE, 0x00801), (0x1EDF, 0x00081),
    (0x1EE0, 0x00801), (0x1EE1, 0x00081), (0x1EE2, 0x00801), (0x1EE3, 0x00081), (0x1EE4, 0x00801), (0x1EE5, 0x00081),
    (0x1EE6, 0x00801), (0x1EE7, 0x00081), (0x1EE8, 0x00801), (0x1EE9, 0x00081), (0x1EEA, 0x00801), (0x1EEB, 0x00081),
    (0x1EEC, 0x00801), (0x1EED, 0x00081), (0x1EEE, 0x00801), (0x1EEF, 0x00081), (0x1EF0, 0x00801), (0x1EF1, 0x00081),
    (0x1EF2, 0x00801), (0x1EF3, 0x00081), (0x1EF4, 0x00801), (0x1EF5, 0x00081), (0x1EF6, 0x00801), (0x1EF7, 0x00081),
    (0x1EF8, 0x00801), (0x1EF9, 0x00081), (0x1EFA, 0x00801), (0x1EFB, 0x00081), (0x1EFC, 0x00801), (0x1EFD, 0x00081),
    (0x1EFE, 0x00801), (0x1EFF, 0x00081), (0x1F08, 0x00801), (0x1F10, 0x00081), (0x1F16, 0x00208), (0x1F18, 0x00801),
    (0x1F1E, 0x00208), (0x1F20, 0x00081), (0x1F28, 0x00801), (0x1F30, 0x00081), (0x1F38, 0x00801), (0x1F40, 0x00081),
    (0x1F46, 0x00208), (0x1F48, 0x00801), (0x1F4E, 0x00208), (0x1F50, 0x00081), (0x1F58, 0x00208), (0x1F59, 0x00801),
    (0x1F5A, 0x00208), (0x1F5B, 0x00801), (0x1F5C, 0x00208), (0x1F5D, 0x00801), (0x1F5E, 0x00208), (0x1F5F, 0x00801),
    (0x1F60, 0x00081), (0x1F68, 0x00801), (0x1F70, 0x00081), (0x1F7E, 0x00208), (0x1F80, 0x00081), (0x1F88, 0x00401),
    (0x1F90, 0x00081), (0x1F98, 0x00401), (0x1FA0, 0x00081), (0x1FA8, 0x00401), (0x1FB0, 0x00081), (0x1FB5, 0x00208),
    (0x1FB6, 0x00081), (0x1FB8, 0x00801), (0x1FBC, 0x00401), (0x1FBD, 0x00240), (0x1FBE, 0x00081), (0x1FBF, 0x00240),
    (0x1FC2, 0x00081), (0x1FC5, 0x00208), (0x1FC6, 0x00081), (0x1FC8, 0x00801), (0x1FCC, 0x00401), (0x1FCD, 0x00240),
    (0x1FD0, 0x00081), (0x1FD4, 0x00208), (0x1FD6, 0x00081), (0x1FD8, 0x00801), (0x1FDC, 0x00208), (0x1FDD, 0x00240),
    (0x1FE0, 0x00081), (0x1FE8, 0x00801), (0x1FED, 0x00240), (0x1FF0, 0x00208), (0x1FF2, 0x00081), (0x1FF5, 0x00208),
    (0x1FF6, 0x00081), (0x1FF8, 0x00801), (0x1FFC, 0x00401), (0x1FFD, 0x00240), (0x1FFF, 0x00208), (0x2000, 0x00220),
    (0x200B, 0x00108), (0x2010, 0x00210), (0x2016, 0x02010), (0x2018, 0x00810), (0x2019, 0x00410), (0x201A, 0x01010),
    (0x201B, 0x00810), (0x201D, 0x00410), (0x201E, 0x01010), (0x201F, 0x00810), (0x2020, 0x02010), (0x2028, 0x000A0),
    (0x2029, 0x00120), (0x202A, 0x00108), (0x202F, 0x00220), (0x2030, 0x02010), (0x2039, 0x00810), (0x203A, 0x00410),
    (0x203B, 0x02010), (0x203C, 0x06010), (0x203D, 0x02010), (0x203F, 0x00110), (0x2041, 0x02010), (0x2044, 0x00140),
    (0x2045, 0x01010), (0x2046, 0x00090), (0x2047, 0x02010), (0x2049, 0x06010), (0x204A, 0x02010), (0x2052, 0x00140),
    (0x2053, 0x02010), (0x2054, 0x00110), (0x2055, 0x02010), (0x205F, 0x00220), (0x2060, 0x00108), (0x2065, 0x00208),
    (0x2066, 0x00108), (0x2070, 0x00204), (0x2071, 0x00101), (0x2072, 0x00208), (0x2074, 0x00204), (0x207A, 0x00140),
    (0x207D, 0x01010), (0x207E, 0x00090), (0x207F, 0x00101), (0x2080, 0x00204), (0x208A, 0x00140), (0x208D, 0x01010),
    (0x208E, 0x00090), (0x208F, 0x00208), (0x2090, 0x00101), (0x209D, 0x00208), (0x20A0, 0x000C0), (0x20C1, 0x00208),
    (0x20D0, 0x00102), (0x20DD, 0x00082), (0x20E1, 0x00102), (0x20E2, 0x00082), (0x20E5, 0x00102), (0x20F1, 0x00208),
    (0x2100, 0x00440), (0x2102, 0x00801), (0x2103, 0x00440), (0x2107, 0x00801), (0x2108, 0x00440), (0x210A, 0x00081),
    (0x210B, 0x00801), (0x210E, 0x00081), (0x2110, 0x00801), (0x2113, 0x00081), (0x2114, 0x00440), (0x2115, 0x00801),
    (0x2116, 0x00440), (0x2118, 0x00140), (0x2119, 0x00801), (0x211E, 0x00440), (0x2122, 0x04440), (0x2123, 0x00440),
    (0x2124, 0x00801), (0x2125, 0x00440), (0x2126, 0x00801), (0x2127, 0x00440), (0x2128, 0x00801), (0x2129, 0x00440),
    (0x212A, 0x00801), (0x212E, 0x00440), (0x212F, 0x00081), (0x2130, 0x00801), (0x2134, 0x00081), (0x2135, 0x00201),
    (0x2139, 0x04081), (0x213A, 0x00440), (0x213C, 0x00081), (0x213E, 0x00801), (0x2140, 0x00140), (0x2145, 0x00801),
    (0x2146, 0x00081), (0x214A, 0x00440), (0x214B, 0x00140), (0x214C, 0x00440), (0x214E, 0x00081), (0x214F, 0x00440),
    (0x2150, 0x00204), (0x2160, 0x00104), (0x2183, 0x00801), (0x2184, 0x00081), (0x2185, 0x00104), (0x2189, 0x00204),
    (0x218A, 0x00440), (0x218C, 0x00208), (0x2190, 0x00140), (0x2194, 0x04140), (0x2195, 0x04440), (0x219A, 0x00140),
    (0x219C, 0x00440), (0x21A0, 0x00140), (0x21A1, 0x00440), (0x21A3, 0x00140), (0x21A4, 0x00440), (0x21A6, 0x00140),
    (0x21A7, 0x00440), (0x21A9, 0x04440), (0x21AB, 0x00440), (0x21AE, 0x00140), (0x21AF, 0x00440), (0x21CE, 0x00140),
    (0x21D0, 0x00440), (0x21D2, 0x00140), (0x21D3, 0x00440), (0x21D4, 0x00140), (0x21D5, 0x00440), (0x21F4, 0x00140),
    (0x2300, 0x00440), (0x2308, 0x01010), (0x2309, 0x00090), (0x230A, 0x01010), (0x230B, 0x00090), (0x230C, 0x00440),
    (0x231A, 0x14440), (0x231C, 0x00440), (0x2320, 0x00140), (0x2322, 0x00440), (0x2328, 0x04440), (0x2329, 0x11010),
    (0x232A, 0x10090), (0x232B, 0x00440), (0x237C, 0x00140), (0x237D, 0x00440), (0x2388, 0x04440), (0x2389, 0x00440),
    (0x239B, 0x00140), (0x23B4, 0x00440), (0x23CF, 0x04440), (0x23D0, 0x00440), (0x23DC, 0x00140), (0x23E2, 0x00440),
    (0x23E9, 0x14440), (0x23ED, 0x04440), (0x23F0, 0x14440), (0x23F1, 0x04440), (0x23F3, 0x14440), (0x23F4, 0x00440),
    (0x23F8, 0x04440), (0x23FB, 0x00440), (0x2427, 0x00208), (0x2440, 0x00440), (0x244B, 0x00208), (0x2460, 0x00204),
    (0x249C, 0x00440), (0x24C2, 0x04440), (0x24C3, 0x00440), (0x24EA, 0x00204), (0x2500, 0x00440), (0x25AA, 0x04440),
    (0x25AC, 0x00440), (0x25B6, 0x04440), (0x25B7, 0x00140), (0x25B8, 0x00440), (0x25C0, 0x04440), (0x25C1, 0x00140),
    (0x25C2, 0x00440), (0x25F8, 0x00140), (0x25FB, 0x04140), (0x25FD, 0x14140), (0x25FF, 0x00140), (0x2600, 0x04440),
    (0x2606, 0x00440), (0x2607, 0x04440), (0x2613, 0x00440), (0x2614, 0x14440), (0x2616, 0x04440), (0x2648, 0x14440),
    (0x2654, 0x04440), (0x266F, 0x04140), (0x2670, 0x04440), (0x267F, 0x14440), (0x2680, 0x04440), (0x2686, 0x00440),
    (0x2690, 0x04440), (0x2693, 0x14440), (0x2694, 0x04440), (0x26A1, 0x14440), (0x26A2, 0x04440), (0x26AA, 0x14440),
    (0x26AC, 0x04440), (0x26BD, 0x14440), (0x26BF, 0x04440), (0x26C4, 0x14440), (0x26C6, 0x04440), (0x26CE, 0x14440),
    (0x26CF, 0x04440), (0x26D4, 0x14440), (0x26D5, 0x04440), (0x26EA, 0x14440), (0x26EB, 0x04440), (0x26F2, 0x14440),
    (0x26F4, 0x04440), (0x26F5, 0x14440), (0x26F6, 0x04440), (0x26FA, 0x14440), (0x26FB, 0x04440), (0x26FD, 0x14440),
    (0x26FE, 0x04440), (0x2705, 0x14440), (0x2706, 0x00440), (0x2708, 0x04440), (0x270A, 0x14440), (0x270C, 0x04440),
    (0x2713, 0x00440), (0x2714, 0x04440), (0x2715, 0x00440), (0x2716, 0x04440), (0x2717, 0x00440), (0x271D, 0x04440),
    (0x271E, 0x00440), (0x2721, 0x04440), (0x2722, 0x00440), (0x2728, 0x14440), (0x2729, 0x00440), (0x2733, 0x04440),
    (0x2735, 0x00440), (0x2744, 0x04440), (0x2745, 0x00440), (0x2747, 0x04440), (0x2748, 0x00440), (0x274C, 0x14440),
    (0x274D, 0x00440), (0x274E, 0x14440), (0x274F, 0x00440), (0x2753, 0x14440), (0x2756, 0x00440), (0x2757, 0x14440),
    (0x2758, 0x00440), (0x2763, 0x04440), (0x2768, 0x01010), (0x2769, 0x00090), (0x276A, 0x01010), (0x276B, 0x00090),
    (0x276C, 0x01010), (0x276D, 0x00090), (0x276E, 0x01010), (0x276F, 0x00090), (0x2770, 0x01010), (0x2771, 0x00090),
    (0x2772, 0x01010), (0x2773, 0x00090), (0x2774, 0x01010), (0x2775, 0x00090), (0x2776, 0x00204), (0x2794, 0x00440),
    (0x2795, 0x14440), (0x2798, 0x00440), (0x27A1, 0x04440), (0x27A2, 0x00440), (0x27B0, 0x14440), (0x27B1, 0x00440),
    (0x27BF, 0x14440), (0x27C0, 0x00140), (0x27C5, 0x01010), (0x27C6, 0x00090), (0x27C7, 0x00140), (0x27E6, 0x01010),
    (0x27E7, 0x00090), (0x27E8, 0x01010), (0x27E9, 0x00090), (0x27EA, 0x01010), (0x27EB, 0x00090), (0x27EC, 0x01010),
    (0x27ED, 0x00090), (0x27EE, 0x01010), (0x27EF, 0x00090), (0x27F0, 0x00140), (0x2800, 0x00440), (0x2900, 0x00140),
    (0x2934, 0x04140), (0x2936, 0x00140), (0x2983, 0x01010), (0x2984, 0x00090), (0x2985, 0x01010), (0x2986, 0x00090),
    (0x2987, 0x01010), (0x2988, 0x00090), (0x2989, 0x01010), (0x298A, 0x00090), (0x298B, 0x01010), (0x298C, 0x00090),
    (0x298D, 0x01010), (0x298E, 0x00090), (0x298F, 0x01010), (0x2990, 0x00090), (0x2991, 0x01010), (0x2992, 0x00090),
    (0x2993, 0x01010), (0x2994, 0x00090), (0x2995, 0x01010), (0x2996, 0x00090), (0x2997, 0x01010), (0x2998, 0x00090),
    (0x2999, 0x00140), (0x29D8, 0x01010), (0x29D9, 0x00090), (0x29DA, 0x01010), (0x29DB, 0x00090), (0x29DC, 0x00140),
    (0x29FC, 0x01010), (0x29FD, 0x00090), (0x29FE, 0x00140), (0x2B00, 0x00440), (0x2B05, 0x04440), (0x2B08, 0x00440),
    (0x2B1B, 0x14440), (0x2B1D, 0x00440), (0x2B30, 0x00140), (0x2B45, 0x00440), (0x2B47, 0x00140), (0x2B4D, 0x00440),
    (0x2B50, 0x14440), (0x2B51, 0x00440), (0x2B55, 0x14440), (0x2B56, 0x00440), (0x2B74, 0x00208), (0x2B76, 0x00440),
    (0x2B96, 0x00208), (0x2B97, 0x00440), (0x2C00, 0x00801), (0x2C30, 0x00081), (0x2C60, 0x00801), (0x2C61, 0x00081),
    (0x2C62, 0x00801), (0x2C65, 0x00081), (0x2C67, 0x00801), (0x2C68, 0x00081), (0x2C69, 0x00801), (0x2C6A, 0x00081),
    (0x2C6B, 0x00801), (0x2C6C, 0x00081), (0x2C6D, 0x00801), (0x2C71, 0x00081), (0x2C72, 0x00801), (0x2C73, 0x00081),
    (0x2C75, 0x00801), (0x2C76, 0x00081), (0x2C7C, 0x00101), (0x2C7E, 0x00801), (0x2C81, 0x00081), (0x2C82, 0x00801),
    (0x2C83, 0x00081), (0x2C84, 0x00801), (0x2C85, 0x00081), (0x2C86, 0x00801), (0x2C87, 0x00081), (0x2C88, 0x00801),
    (0x2C89, 0x00081), (0x2C8A, 0x00801), (0x2C8B, 0x00081), (0x2C8C, 0x00801), (0x2C8D, 0x00081), (0x2C8E, 0x00801),
    (0x2C8F, 0x00081), (0x2C90, 0x00801), (0x2C91, 0x00081), (0x2C92, 0x00801), (0x2C93, 0x00081), (0x2C94, 0x00801),
    (0x2C95, 0x00081), (0x2C96, 0x00801), (0x2C97, 0x00081), (0x2C98, 0x00801), (0x2C99, 0x00081), (0x2C9A, 0x00801),
    (0x2C9B, 0x00081), (0x2C9C, 0x00801), (0x2C9D, 0x00081), (0x2C9E, 0x00801), (0x2C9F, 0x00081), (0x2CA0, 0x00801),
    (0x2CA1, 0x00081), (0x2CA2, 0x00801), (0x2CA3, 0x00081), (0x2CA4, 0x00801), (0x2CA5, 0x00081), (0x2CA6, 0x00801),
    (0x2CA7, 0x00081), (0x2CA8, 0x00801), (0x2CA9, 0x00081), (0x2CAA, 0x00801), (0x2CAB, 0x00081), (0x2CAC, 0x00801),
    (0x2CAD, 0x00081), (0x2CAE, 0x00801), (0x2CAF, 0x00081), (0x2CB0, 0x00801), (0x2CB1, 0x00081), (0x2CB2, 0x00801),
    (0x2CB3, 0x00081), (0x2CB4, 0x00801), (0x2CB5, 0x00081), (0x2CB6, 0x00801), (0x2CB7, 0x00081), (0x2CB8, 0x00801),
    (0x2CB9, 0x00081), (0x2CBA, 0x00801), (0x2CBB, 0x00081), (0x2CBC, 0x00801), (0x2CBD, 0x00081), (0x2CBE, 0x00801),
    (0x2CBF, 0x00081), (0x2CC0, 0x00801), (0x2CC1, 0x00081), (0x2CC2, 0x00801), (0x2CC3, 0x00081), (0x2CC4, 0x00801),
    (0x2CC5, 0x00081), (0x2CC6, 0x00801), (0x2CC7, 0x00081), (0x2CC8, 0x00801), (0x2CC9, 0x00081), (0x2CCA, 0x00801),
    (0x2CCB, 0x00081), (0x2CCC, 0x00801), (0x2CCD, 0x00081), (0x2CCE, 0x00801), (0x2CCF, 0x00081), (0x2CD0, 0x00801),
    (0x2CD1, 0x00081), (0x2CD2, 0x00801), (0x2CD3, 0x00081), (0x2CD4, 0x00801), (0x2CD5, 0x00081), (0x2CD6, 0x00801),
    (0x2CD7, 0x00081), (0x2CD8, 0x00801), (0x2CD9, 0x00081), (0x2CDA, 0x00801), (0x2CDB, 0x00081), (0x2CDC, 0x00801),
    (0x2CDD, 0x00081), (0x2CDE, 0x00801), (0x2CDF, 0x00081), (0x2CE0, 0x00801), (0x2CE1, 0x00081), (0x2CE2, 0x00801),
    (0x2CE3, 0x00081), (0x2CE5, 0x00440), (0x2CEB, 0x00801), (0x2CEC, 0x00081), (0x2CED, 0x00801), (0x2CEE, 0x00081),
    (0x2CEF, 0x00102), (0x2CF2, 0x00801), (0x2CF3, 0x00081), (0x2CF4, 0x00208), (0x2CF9, 0x02010), (0x2CFD, 0x00204),
    (0x2CFE, 0x02010), (0x2D00, 0x00081), (0x2D26, 0x00208), (0x2D27, 0x00081), (0x2D28, 0x00208), (0x2D2D, 0x00081),
    (0x2D2E, 0x00208), (0x2D30, 0x00201), (0x2D68, 0x00208), (0x2D6F, 0x00101), (0x2D70, 0x02010), (0x2D71, 0x00208),
    (0x2D7F, 0x00102), (0x2D80, 0x00201), (0x2D97, 0x00208), (0x2DA0, 0x00201), (0x2DA7, 0x00208), (0x2DA8, 0x00201),
    (0x2DAF, 0x00208), (0x2DB0, 0x00201), (0x2DB7, 0x00208), (0x2DB8, 0x00201), (0x2DBF, 0x00208), (0x2DC0, 0x00201),
    (0x2DC7, 0x00208), (0x2DC8, 0x00201), (0x2DCF, 0x00208), (0x2DD0, 0x00201), (0x2DD7, 0x00208), (0x2DD8, 0x00201),
    (0x2DDF, 0x00208), (0x2DE0, 0x00102), (0x2E00, 0x02010), (0x2E02, 0x00810), (0x2E03, 0x00410), (0x2E04, 0x00810),
    (0x2E05, 0x00410), (0x2E06, 0x02010), (0x2E09, 0x00810), (0x2E0A, 0x00410), (0x2E0B, 0x02010), (0x2E0C, 0x00810),
    (0x2E0D, 0x00410), (0x2E0E, 0x02010), (0x2E17, 0x00210), (0x2E18, 0x02010), (0x2E1A, 0x00210), (0x2E1B, 0x02010),
    (0x2E1C, 0x00810), (0x2E1D, 0x00410), (0x2E1E, 0x02010), (0x2E20, 0x00810), (0x2E21, 0x00410), (0x2E22, 0x01010),
    (0x2E23, 0x00090), (0x2E24, 0x01010), (0x2E25, 0x00090), (0x2E26, 0x01010), (0x2E27, 0x00090), (0x2E28, 0x01010),
    (0x2E29, 0x00090), (0x2E2A, 0x02010), (0x2E2F, 0x00101), (0x2E30, 0x02010), (0x2E3A, 0x00210), (0x2E3C, 0x02010),
    (0x2E40, 0x00210), (0x2E41, 0x02010), (0x2E42, 0x01010), (0x2E43, 0x02010), (0x2E50, 0x00440), (0x2E52, 0x02010),
    (0x2E55, 0x01010), (0x2E56, 0x00090), (0x2E57, 0x01010), (0x2E58, 0x00090), (0x2E59, 0x01010), (0x2E5A, 0x00090),
    (0x2E5B, 0x01010), (0x2E5C, 0x00090), (0x2E5D, 0x00210), (0x2E5E, 0x00208), (0x2E80, 0x10440), (0x2E9A, 0x00208),
    (0x2E9B, 0x10440), (0x2EF4, 0x00208), (0x2F00, 0x10440), (0x2FD6, 0x00208), (0x2FF0, 0x10440), (0x3000, 0x10220),
    (0x3001, 0x12010), (0x3004, 0x10440), (0x3005, 0x10101), (0x3006, 0x10201), (0x3007, 0x10104), (0x3008, 0x11010),
    (0x3009, 0x10090), (0x300A, 0x11010), (0x300B, 0x10090), (0x300C, 0x11010), (0x300D, 0x10090), (0x300E, 0x11010),
    (0x300F, 0x10090), (0x3010, 0x11010), (0x3011, 0x10090), (0x3012, 0x10440), (0x3014, 0x11010), (0x3015, 0x10090),
    (0x3016, 0x11010), (0x3017, 0x10090), (0x3018, 0x11010), (0x3019, 0x10090), (0x301A, 0x11010), (0x301B, 0x10090),
    (0x301C, 0x10210), (0x301D, 0x11010), (0x301E, 0x10090), (0x3020, 0x10440), (0x3021, 0x10104), (0x302A, 0x10102),
    (0x302E, 0x10202), (0x3030, 0x14210), (0x3031, 0x10101), (0x3036, 0x10440), (0x3038, 0x10104), (0x303B, 0x10101),
    (0x303C, 0x10201), (0x303D, 0x16010), (0x303E, 0x10440), (0x303F, 0x00440), (0x3040, 0x00208), (0x3041, 0x10201),
    (0x3097, 0x00208), (0x3099, 0x10102), (0x309B, 0x10240), (0x309D, 0x10101), (0x309F, 0x10201), (0x30A0, 0x10210),
    (0x30A1, 0x10201), (0x30FB, 0x12010), (0x30FC, 0x10101), (0x30FF, 0x10201), (0x3100, 0x00208), (0x3105, 0x10201),
    (0x3130, 0x00208), (0x3131, 0x10201), (0x318F, 0x00208), (0x3190, 0x10440), (0x3192, 0x10204), (0x3196, 0x10440),
    (0x31A0, 0x10201), (0x31C0, 0x10440), (0x31E4, 0x00208), (0x31EF, 0x10440), (0x31F0, 0x10201), (0x3200, 0x10440),
    (0x321F, 0x00208), (0x3220, 0x10204), (0x322A, 0x10440), (0x3248, 0x00204), (0x3250, 0x10440), (0x3251, 0x10204),
    (0x3260, 0x10440), (0x3280, 0x10204), (0x328A, 0x10440), (0x3297, 0x14440), (0x3298, 0x10440), (0x3299, 0x14440),
    (0x329A, 0x10440), (0x32B1, 0x10204), (0x32C0, 0x10440), (0x3400, 0x10201), (0x4DC0, 0x00440), (0x4E00, 0x10201),
    (0xA015, 0x10101), (0xA016, 0x10201), (0xA48D, 0x00208), (0xA490, 0x10440), (0xA4C7, 0x00208), (0xA4D0, 0x00201),
    (0xA4F8, 0x00101), (0xA4FE, 0x02010), (0xA500, 0x00201), (0xA60C, 0x00101), (0xA60D, 0x02010), (0xA610, 0x00201),
    (0xA620, 0x00084), (0xA62A, 0x00201), (0xA62C, 0x00208), (0xA640, 0x00801), (0xA641, 0x00081), (0xA642, 0x00801),
    (0xA643, 0x00081), (0xA644, 0x00801), (0xA645, 0x00081), (0xA646, 0x00801), (0xA647, 0x00081), (0xA648, 0x00801),
    (0xA649, 0x00081), (0xA64A, 0x00801), (0xA64B, 0x00081), (0xA64C, 0x00801), (0xA64D, 0x00081), (0xA64E, 0x00801),
    (0xA64F, 0x00081), (0xA650, 0x00801), (0xA651, 0x00081), (0xA652, 0x00801), (0xA653, 0x00081), (0xA654, 0x00801),
    (0xA655, 0x00081), (0xA656, 0x00801), (0xA657, 0x00081), (0xA658, 0x00801), (0xA659, 0x00081), (0xA65A, 0x00801),
    (0xA65B, 0x00081), (0xA65C, 0x00801), (0xA65D, 0x00081), (0xA65E, 0x00801), (0xA65F, 0x00081), (0xA660, 0x00801),
    (0xA661, 0x00081), (0xA662, 0x00801), (0xA663, 0x00081), (0xA664, 0x00801), (0xA665, 0x00081), (0xA666, 0x00801),
    (0xA667, 0x00081), (0xA668, 0x00801), (0xA669, 0x00081), (0xA66A, 0x00801), (0xA66B, 0x00081), (0xA66C, 0x00801),
    (0xA66D, 0x00081), (0xA66E, 0x00201), (0xA66F, 0x00102), (0xA670, 0x00082), (0xA673, 0x02010), (0xA674, 0x00102),
    (0xA67E, 0x02010), (0xA67F, 0x00101), (0xA680, 0x00801), (0xA681, 0x00081), (0xA682, 0x00801), (0xA683, 0x00081),
    (0xA684, 0x00801), (0xA685, 0x00081), (0xA686, 0x00801), (0xA687, 0x00081), (0xA688, 0x00801), (0xA689, 0x00081),
    (0xA68A, 0x00801), (0xA68B, 0x00081), (0xA68C, 0x00801), (0xA68D, 0x00081), (0xA68E, 0x00801), (0xA68F, 0x00081),
    (0xA690, 0x00801), (0xA691, 0x00081), (0xA692, 0x00801), (0xA693, 0x00081), (0xA694, 0x00801), (0xA695, 0x00081),
    (0xA696, 0x00801), (0xA697, 0x00081), (0xA698, 0x00801), (0xA699, 0x00081), (0xA69A, 0x00801), (0xA69B, 0x00081),
    (0xA69C, 0x00101), (0xA69E, 0x00102), (0xA6A0, 0x00201), (0xA6E6, 0x00104), (0xA6F0, 0x00102), (0xA6F2, 0x02010),
    (0xA6F8, 0x00208), (0xA700, 0x00240), (0xA717, 0x00101), (0xA720, 0x00240), (0xA722, 0x00801), (0xA723, 0x00081),
    (0xA724, 0x00801), (0xA725, 0x00081), (0xA726, 0x00801), (0xA727, 0x00081), (0xA728, 0x00801), (0xA729, 0x00081),
    (0xA72A, 0x00801), (0xA72B, 0x00081), (0xA72C, 0x00801), (0xA72D, 0x00081), (0xA72E, 0x00801), (0xA72F, 0x00081),
    (0xA732, 0x00801), (0xA733, 0x00081), (0xA734, 0x00801), (0xA735, 0x00081), (0xA736, 0x00801), (0xA737, 0x00081),
    (0xA738, 0x00801), (0xA739, 0x00081), (0xA73A, 0x00801), (0xA73B, 0x00081), (0xA73C, 0x00801), (0xA73D, 0x00081),
    (0xA73E, 0x00801), (0xA73F, 0x00081), (0xA740, 0x00801), (0xA741, 0x00081), (0xA742, 0x00801), (0xA743, 0x00081),
    (0xA744, 0x00801), (0xA745, 0x00081), (0xA746, 0x00801), (0xA747, 0x00081), (0xA748, 0x00801), (0xA749, 0x00081),
    (0xA74A, 0x00801), (0xA74B, 0x00081), (0xA74C, 0x00801), (0xA74D, 0x00081), (0xA74E, 0x00801), (0xA74F, 0x00081),
    (0xA750, 0x00801), (0xA751, 0x00081), (0xA752, 0x00801), (0xA753, 0x00081), (0xA754, 0x00801), (0xA755, 0x00081),
    (0xA756, 0x00801), (0xA757, 0x00081), (0xA758, 0x00801), (0xA759, 0x00081), (0xA75A, 0x00801), (0xA75B, 0x00081),
    (0xA75C, 0x00801), (0xA75D, 0x00081), (0xA75E, 0x00801), (0xA75F, 0x00081), (0xA760, 0x00801), (0xA761, 0x00081),
    (0xA762, 0x00801), (0xA763, 0x00081), (0xA764, 0x00801), (0xA765, 0x00081), (0xA766, 0x00801), (0xA767, 0x00081),
    (0xA768, 0x00801), (0xA769, 0x00081), (0xA76A, 0x00801), (0xA76B, 0x00081), (0xA76C, 0x00801), (0xA76D, 0x00081),
    (0xA76E, 0x00801), (0xA76F, 0x00081), (0xA770, 0x00101), (0xA771, 0x00081), (0xA779, 0x00801), (0xA77A, 0x00081),
    (0xA77B, 0x00801), (0xA77C, 0x00081), (0xA77D, 0x00801), (0xA77F, 0x00081), (0xA780, 0x00801), (0xA781, 0x00081),
    (0xA782, 0x00801), (0xA783, 0x00081), (0xA784, 0x00801), (0xA785, 0x00081), (0xA786, 0x00801), (0xA787, 0x00081),
    (0xA788, 0x00101), (0xA789, 0x00240), (0xA78B, 0x00801), (0xA78C, 0x00081), (0xA78D, 0x00801), (0xA78E, 0x00081),
    (0xA78F, 0x00201), (0xA790, 0x00801), (0xA791, 0x00081), (0xA792, 0x00801), (0xA793, 0x00081), (0xA796, 0x00801),
    (0xA797, 0x00081), (0xA798, 0x00801), (0xA799, 0x00081), (0xA79A, 0x00801), (0xA79B, 0x00081), (0xA79C, 0x00801),
    (0xA79D, 0x00081), (0xA79E, 0x00801), (0xA79F, 0x00081), (0xA7A0, 0x00801), (0xA7A1, 0x00081), (0xA7A2, 0x00801),
    (0xA7A3, 0x00081), (0xA7A4, 0x00801), (0xA7A5, 0x00081), (0xA7A6, 0x00801), (0xA7A7, 0x00081), (0xA7A8, 0x00801),
    (0xA7A9, 0x00081), (0xA7AA, 0x00801), (0xA7AF, 0x00081), (0xA7B0, 0x00801), (0xA7B5, 0x00081), (0xA7B6, 0x00801),
    (0xA7B7, 0x00081), (0xA7B8, 0x00801), (0xA7B9, 0x00081), (0xA7BA, 0x00801), (0xA7BB, 0x00081), (0xA7BC, 0x00801),
    (0xA7BD, 0x00081), (0xA7BE, 0x00801), (0xA7BF, 0x00081), (0xA7C0, 0x00801), (0xA7C1, 0x00081), (0xA7C2, 0x00801),
    (0xA7C3, 0x00081), (0xA7C4, 0x00801), (0xA7C8, 0x00081), (0xA7C9, 0x00801), (0xA7CA, 0x00081), (0xA7CB, 0x00208),
    (0xA7D0, 0x00801), (0xA7D1, 0x00081), (0xA7D2, 0x00208), (0xA7D3, 0x00081), (0xA7D4, 0x00208), (0xA7D5, 0x00081),
    (0xA7D6, 0x00801), (0xA7D7, 0x00081), (0xA7D8, 0x00801), (0xA7D9, 0x00081), (0xA7DA, 0x00208), (0xA7F2, 0x00101),
    (0xA7F5, 0x00801), (0xA7F6, 0x00081), (0xA7F7, 0x00201), (0xA7F8, 0x00101), (0xA7FA, 0x00081), (0xA7FB, 0x00201),
    (0xA802, 0x00102), (0xA803, 0x00201), (0xA806, 0x00102), (0xA807, 0x00201), (0xA80B, 0x00102), (0xA80C, 0x00201),
    (0xA823, 0x00202), (0xA825, 0x00102), (0xA827, 0x00202), (0xA828, 0x00440), (0xA82C, 0x00102), (0xA82D, 0x00208),
    (0xA830, 0x00204), (0xA836, 0x00440), (0xA838, 0x000C0), (0xA839, 0x00440), (0xA83A, 0x00208), (0xA840, 0x00201),
    (0xA874, 0x02010), (0xA878, 0x00208), (0xA880, 0x00202), (0xA882, 0x00201), (0xA8B4, 0x00202), (0xA8C4, 0x00102),
    (0xA8C6, 0x00208), (0xA8CE, 0x02010), (0xA8D0, 0x00084), (0xA8DA, 0x00208), (0xA8E0, 0x00102), (0xA8F2, 0x00201),
    (0xA8F8, 0x02010), (0xA8FB, 0x00201), (0xA8FC, 0x02010), (0xA8FD, 0x00201), (0xA8FF, 0x00102), (0xA900, 0x00084),
    (0xA90A, 0x00201), (0xA926, 0x00102), (0xA92E, 0x02010), (0xA930, 0x00201), (0xA947, 0x00102), (0xA952, 0x00202),
    (0xA954, 0x00208), (0xA95F, 0x02010), (0xA960, 0x10201), (0xA97D, 0x00208), (0xA980, 0x00102), (0xA983, 0x00202),
    (0xA984, 0x00201), (0xA9B3, 0x00102), (0xA9B4, 0x00202), (0xA9B6, 0x00102), (0xA9BA, 0x00202), (0xA9BC, 0x00102),
    (0xA9BE, 0x00202), (0xA9C1, 0x02010), (0xA9CE, 0x00208), (0xA9CF, 0x00101), (0xA9D0, 0x00084), (0xA9DA, 0x00208),
    (0xA9DE, 0x02010), (0xA9E0, 0x00201), (0xA9E5, 0x00102), (0xA9E6, 0x00101), (0xA9E7, 0x00201), (0xA9F0, 0x00084),
    (0xA9FA, 0x00201), (0xA9FF, 0x00208), (0xAA00, 0x00201), (0xAA29, 0x00102), (0xAA2F, 0x00202), (0xAA31, 0x00102),
    (0xAA33, 0x00202), (0xAA35, 0x00102), (0xAA37, 0x00208), (0xAA40, 0x00201), (0xAA43, 0x00102), (0xAA44, 0x00201),
    (0xAA4C, 0x00102), (0xAA4D, 0x00202), (0xAA4E, 0x00208), (0xAA50, 0x00084), (0xAA5A, 0x00208), (0xAA5C, 0x02010),
    (0xAA60, 0x00201), (0xAA70, 0x00101), (0xAA71, 0x00201), (0xAA77, 0x00440), (0xAA7A, 0x00201), (0xAA7B, 0x00202),
    (0xAA7C, 0x00102), (0xAA7D, 0x00202), (0xAA7E, 0x00201), (0xAAB0, 0x00102), (0xAAB1, 0x00201), (0xAAB2, 0x00102),
    (0xAAB5, 0x00201), (0xAAB7, 0x00102), (0xAAB9, 0x00201), (0xAABE, 0x00102), (0xAAC0, 0x00201), (0xAAC1, 0x00102),
    (0xAAC2, 0x00201), (0xAAC3, 0x00208), (0xAADB, 0x00201), (0xAADD, 0x00101), (0xAADE, 0x02010), (0xAAE0, 0x00201),
    (0xAAEB, 0x00202), (0xAAEC, 0x00102), (0xAAEE, 0x00202), (0xAAF0, 0x02010), (0xAAF2, 0x00201), (0xAAF3, 0x00101),
    (0xAAF5, 0x00202), (0xAAF6, 0x00102), (0xAAF7, 0x00208), (0xAB01, 0x00201), (0xAB07, 0x00208), (0xAB09, 0x00201),
    (0xAB0F, 0x00208), (0xAB11, 0x00201), (0xAB17, 0x00208), (0xAB20, 0x00201), (0xAB27, 0x00208), (0xAB28, 0x00201),
    (0xAB2F, 0x00208), (0xAB30, 0x00081), (0xAB5B, 0x00240), (0xAB5C, 0x00101), (0xAB60, 0x00081), (0xAB69, 0x00101),
    (0xAB6A, 0x00240), (0xAB6C, 0x00208), (0xAB70, 0x00081), (0xABC0, 0x00201), (0xABE3, 0x00202), (0xABE5, 0x00102),
    (0xABE6, 0x00202), (0xABE8, 0x00102), (0xABE9, 0x00202), (0xABEB, 0x02010), (0xABEC, 0x00202), (0xABED, 0x00102),
    (0xABEE, 0x00208), (0xABF0, 0x00084), (0xABFA, 0x00208), (0xAC00, 0x10201), (0xD7A4, 0x00208), (0xD7B0, 0x00201),
    (0xD7C7, 0x00208), (0xD7CB, 0x00201), (0xD7FC, 0x00208), (0xD800, 0x00808), (0xE000, 0x00408), (0xF900, 0x10201),
    (0xFA6E, 0x10208), (0xFA70, 0x10201), (0xFADA, 0x10208), (0xFB00, 0x00081), (0xFB07, 0x00208), (0xFB13, 0x00081),
    (0xFB18, 0x00208), (0xFB1D, 0x00201), (0xFB1E, 0x00102), (0xFB1F, 0x00201), (0xFB29, 0x00140), (0xFB2A, 0x00201),
    (0xFB37, 0x00208), (0xFB38, 0x00201), (0xFB3D, 0x00208), (0xFB3E, 0x00201), (0xFB3F, 0x00208), (0xFB40, 0x00201),
    (0xFB42, 0x00208), (0xFB43, 0x00201), (0xFB45, 0x00208), (0xFB46, 0x00201), (0xFBB2, 0x00240), (0xFBC3, 0x00208),
    (0xFBD3, 0x00201), (0xFD3E, 0x00090), (0xFD3F, 0x01010), (0xFD40, 0x00440), (0xFD50, 0x00201), (0xFD90, 0x00208),
    (0xFD92, 0x00201), (0xFDC8, 0x00208), (0xFDCF, 0x00440), (0xFDD0, 0x00208), (0xFDF0, 0x00201), (0xFDFC, 0x000C0),
    (0xFDFD, 0x00440), (0xFE00, 0x00102), (0xFE10, 0x12010), (0xFE17, 0x11010), (0xFE18, 0x10090), (0xFE19, 0x12010),
    (0xFE1A, 0x00208), (0xFE20, 0x00102), (0xFE30, 0x12010), (0xFE31, 0x10210), (0xFE33, 0x10110), (0xFE35, 0x11010),
    (0xFE36, 0x10090), (0xFE37, 0x11010), (0xFE38, 0x10090), (0xFE39, 0x11010), (0xFE3A, 0x10090), (0xFE3B, 0x11010),
    (0xFE3C, 0x10090), (0xFE3D, 0x11010), (0xFE3E, 0x10090), (0xFE3F, 0x11010), (0xFE40, 0x10090), (0xFE41, 0x11010),
    (0xFE42, 0x10090), (0xFE43, 0x11010), (0xFE44, 0x10090), (0xFE45, 0x12010), (0xFE47, 0x11010), (0xFE48, 0x10090),
    (0xFE49, 0x12010), (0xFE4D, 0x10110), (0xFE50, 0x12010), (0xFE53, 0x00208), (0xFE54, 0x12010), (0xFE58, 0x10210),
    (0xFE59, 0x11010), (0xFE5A, 0x10090), (0xFE5B, 0x11010), (0xFE5C, 0x10090), (0xFE5D, 0x11010), (0xFE5E, 0x10090),
    (0xFE5F, 0x12010), (0xFE62, 0x10140), (0xFE63, 0x10210), (0xFE64, 0x10140), (0xFE67, 0x00208), (0xFE68, 0x12010),
    (0xFE69, 0x100C0), (0xFE6A, 0x12010), (0xFE6C, 0x00208), (0xFE70, 0x00201), (0xFE75, 0x00208), (0xFE76, 0x00201),
    (0xFEFD, 0x00208), (0xFEFF, 0x00108), (0xFF00, 0x00208), (0xFF01, 0x12010), (0xFF04, 0x100C0), (0xFF05, 0x12010),
    (0xFF08, 0x11010), (0xFF09, 0x10090), (0xFF0A, 0x12010), (0xFF0B, 0x10140), (0xFF0C, 0x12010), (0xFF0D, 0x10210),
    (0xFF0E, 0x12010), (0xFF10, 0x10084), (0xFF1A, 0x12010), (0xFF1C, 0x10140), (0xFF1F, 0x12010), (0xFF21, 0x10801),
    (0xFF3B, 0x11010), (0xFF3C, 0x12010), (0xFF3D, 0x10090), (0xFF3E, 0x10240), (0xFF3F, 0x10110), (0xFF40, 0x10240),
    (0xFF41, 0x10081), (0xFF5B, 0x11010), (0xFF5C, 0x10140), (0xFF5D, 0x10090), (0xFF5E, 0x10140), (0xFF5F, 0x11010),
    (0xFF60, 0x10090), (0xFF61, 0x02010), (0xFF62, 0x01010), (0xFF63, 0x00090), (0xFF64, 0x02010), (0xFF66, 0x00201),
    (0xFF70, 0x00101), (0xFF71, 0x00201), (0xFF9E, 0x00101), (0xFFA0, 0x00201), (0xFFBF, 0x00208), (0xFFC2, 0x00201),
    (0xFFC8, 0x00208), (0xFFCA, 0x00201), (0xFFD0, 0x00208), (0xFFD2, 0x00201), (0xFFD8, 0x00208), (0xFFDA, 0x00201),
    (0xFFDD, 0x00208), (0xFFE0, 0x100C0), (0xFFE2, 0x10140), (0xFFE3, 0x10240), (0xFFE4, 0x10440), (0xFFE5, 0x100C0),
    (0xFFE7, 0x00208), (0xFFE8, 0x00440), (0xFFE9, 0x00140), (0xFFED, 0x00440), (0xFFEF, 0x00208), (0xFFF9, 0x00108),
    (0xFFFC, 0x00440), (0xFFFE, 0x00208), (0x10000, 0x00201), (0x1000C, 0x00208), (0x1000D, 0x00201), (0x10027, 0x00208),
    (0x10028, 0x00201), (0x1003B, 0x00208), (0x1003C, 0x00201), (0x1003E, 0x00208), (0x1003F, 0x00201), (0x1004E, 0x00208),
    (0x10050, 0x00201), (0x1005E, 0x00208), (0x10080, 0x00201), (0x100FB, 0x00208), (0x10100, 0x02010), (0x10103, 0x00208),
    (0x10107, 0x00204), (0x10134, 0x00208), (0x10137, 0x00440), (0x10140, 0x00104), (0x10175, 0x00204), (0x10179, 0x00440),
    (0x1018A, 0x00204), (0x1018C, 0x00440), (0x1018F, 0x00208), (0x10190, 0x00440), (0x1019D, 0x00208), (0x101A0, 0x00440),
    (0x101A1, 0x00208), (0x101D0, 0x00440), (0x101FD, 0x00102), (0x101FE, 0x00208), (0x10280, 0x00201), (0x1029D, 0x00208),
    (0x102A0, 0x00201), (0x102D1, 0x00208), (0x102E0, 0x00102), (0x102E1, 0x00204), (0x102FC, 0x00208), (0x10300, 0x00201),
    (0x10320, 0x00204), (0x10324, 0x00208), (0x1032D, 0x00201), (0x10341, 0x00104), (0x10342, 0x00201), (0x1034A, 0x00104),
    (0x1034B, 0x00208), (0x10350, 0x00201), (0x10376, 0x00102), (0x1037B, 0x00208), (0x10380, 0x00201), (0x1039E, 0x00208),
    (0x1039F, 0x02010), (0x103A0, 0x00201), (0x103C4, 0x00208), (0x103C8, 0x00201), (0x103D0, 0x02010), (0x103D1, 0x00104),
    (0x103D6, 0x00208), (0x10400, 0x00801), (0x10428, 0x00081), (0x10450, 0x00201), (0x1049E, 0x00208), (0x104A0, 0x00084),
    (0x104AA, 0x00208), (0x104B0, 0x00801), (0x104D4, 0x00208), (0x104D8, 0x00081), (0x104FC, 0x00208), (0x10500, 0x00201),
    (0x10528, 0x00208), (0x10530, 0x00201), (0x10564, 0x00208), (0x1056F, 0x02010), (0x10570, 0x00801), (0x1057B, 0x00208),
    (0x1057C, 0x00801), (0x1058B, 0x00208), (0x1058C, 0x00801), (0x10593, 0x00208), (0x10594, 0x00801), (0x10596, 0x00208),
    (0x10597, 0x00081), (0x105A2, 0x00208), (0x105A3, 0x00081), (0x105B2, 0x00208), (0x105B3, 0x00081), (0x105BA, 0x00208),
    (0x105BB, 0x00081), (0x105BD, 0x00208), (0x10600, 0x00201), (0x10737, 0x00208), (0x10740, 0x00201), (0x10756, 0x00208),
    (0x10760, 0x00201), (0x10768, 0x00208), (0x10780, 0x00101), (0x10786, 0x00208), (0x10787, 0x00101), (0x107B1, 0x00208),
    (0x107B2, 0x00101), (0x107BB, 0x00208), (0x10800, 0x00201), (0x10806, 0x00208), (0x10808, 0x00201), (0x10809, 0x00208),
    (0x1080A, 0x00201), (0x10836, 0x00208), (0x10837, 0x00201), (0x10839, 0x00208), (0x1083C, 0x00201), (0x1083D, 0x00208),
    (0x1083F, 0x00201), (0x10856, 0x00208), (0x10857, 0x02010), (0x10858, 0x00204), (0x10860, 0x00201), (0x10877, 0x00440),
    (0x10879, 0x00204), (0x10880, 0x00201), (0x1089F, 0x00208), (0x108A7, 0x00204), (0x108B0, 0x00208), (0x108E0, 0x00201),
    (0x108F3, 0x00208), (0x108F4, 0x00201), (0x108F6, 0x00208), (0x108FB, 0x00204), (0x10900, 0x00201), (0x10916, 0x00204),
    (0x1091C, 0x00208), (0x1091F, 0x02010), (0x10920, 0x00201), (0x1093A, 0x00208), (0x1093F, 0x02010), (0x10940, 0x00208),
    (0x10980, 0x00201), (0x109B8, 0x00208), (0x109BC, 0x00204), (0x109BE, 0x00201), (0x109C0, 0x00204), (0x109D0, 0x00208),
    (0x109D2, 0x00204), (0x10A00, 0x00201), (0x10A01, 0x00102), (0x10A04, 0x00208), (0x10A05, 0x00102), (0x10A07, 0x00208),
    (0x10A0C, 0x00102), (0x10A10, 0x00201), (0x10A14, 0x00208), (0x10A15, 0x00201), (0x10A18, 0x00208), (0x10A19, 0x00201),
    (0x10A36, 0x00208), (0x10A38, 0x00102), (0x10A3B, 0x00208), (0x10A3F, 0x00102), (0x10A40, 0x00204), (0x10A49, 0x00208),
    (0x10A50, 0x02010), (0x10A59, 0x00208), (0x10A60, 0x00201), (0x10A7D, 0x00204), (0x10A7F, 0x02010), (0x10A80, 0x00201),
    (0x10A9D, 0x00204), (0x10AA0, 0x00208), (0x10AC0, 0x00201), (0x10AC8, 0x00440), (0x10AC9, 0x00201), (0x10AE5, 0x00102),
    (0x10AE7, 0x00208), (0x10AEB, 0x00204), (0x10AF0, 0x02010), (0x10AF7, 0x00208), (0x10B00, 0x00201), (0x10B36, 0x00208),
    (0x10B39, 0x02010), (0x10B40, 0x00201), (0x10B56, 0x00208), (0x10B58, 0x00204), (0x10B60, 0x00201), (0x10B73, 0x00208),
    (0x10B78, 0x00204), (0x10B80, 0x00201), (0x10B92, 0x00208), (0x10B99, 0x02010), (0x10B9D, 0x00208), (0x10BA9, 0x00204),
    (0x10BB0, 0x00208), (0x10C00, 0x00201), (0x10C49, 0x00208), (0x10C80, 0x00801), (0x10CB3, 0x00208), (0x10CC0, 0x00081),
    (0x10CF3, 0x00208), (0x10CFA, 0x00204), (0x10D00, 0x00201), (0x10D24, 0x00102), (0x10D28, 0x00208), (0x10D30, 0x00084),
    (0x10D3A, 0x00208), (0x10E60, 0x00204), (0x10E7F, 0x00208), (0x10E80, 0x00201), (0x10EAA, 0x00208), (0x10EAB, 0x00102),
    (0x10EAD, 0x00210), (0x10EAE, 0x00208), (0x10EB0, 0x00201), (0x10EB2, 0x00208), (0x10EFD, 0x00102), (0x10F00, 0x00201),
    (0x10F1D, 0x00204), (0x10F27, 0x00201), (0x10F28, 0x00208), (0x10F30, 0x00201), (0x10F46, 0x00102), (0x10F51, 0x00204),
    (0x10F55, 0x02010), (0x10F5A, 0x00208), (0x10F70, 0x00201), (0x10F82, 0x00102), (0x10F86, 0x02010), (0x10F8A, 0x00208),
    (0x10FB0, 0x00201), (0x10FC5, 0x00204), (0x10FCC, 0x00208), (0x10FE0, 0x00201), (0x10FF7, 0x00208), (0x11000, 0x00202),
    (0x11001, 0x00102), (0x11002, 0x00202), (0x11003, 0x00201), (0x11038, 0x00102), (0x11047, 0x02010), (0x1104E, 0x00208),
    (0x11052, 0x00204), (0x11066, 0x00084), (0x11070, 0x00102), (0x11071, 0x00201), (0x11073, 0x00102), (0x11075, 0x00201),
    (0x11076, 0x00208), (0x1107F, 0x00102), (0x11082, 0x00202), (0x11083, 0x00201), (0x110B0, 0x00202), (0x110B3, 0x00102),
    (0x110B7, 0x00202), (0x110B9, 0x00102), (0x110BB, 0x02010), (0x110BD, 0x00108), (0x110BE, 0x02010), (0x110C2, 0x00102),
    (0x110C3, 0x00208), (0x110CD, 0x00108), (0x110CE, 0x00208), (0x110D0, 0x00201), (0x110E9, 0x00208), (0x110F0, 0x00084),
    (0x110FA, 0x00208), (0x11100, 0x00102), (0x11103, 0x00201), (0x11127, 0x00102), (0x1112C, 0x00202), (0x1112D, 0x00102),
    (0x11135, 0x00208), (0x11136, 0x00084), (0x11140, 0x02010), (0x11144, 0x00201), (0x11145, 0x00202), (0x11147, 0x00201),
    (0x11148, 0x00208), (0x11150, 0x00201), (0x11173, 0x00102), (0x11174, 0x02010), (0x11176, 0x00201), (0x11177, 0x00208),
    (0x11180, 0x00102), (0x11182, 0x00202), (0x11183, 0x00201), (0x111B3, 0x00202), (0x111B6, 0x00102), (0x111BF, 0x00202),
    (0x111C1, 0x00201), (0x111C5, 0x02010), (0x111C9, 0x00102), (0x111CD, 0x02010), (0x111CE, 0x00202), (0x111CF, 0x00102),
    (0x111D0, 0x00084), (0x111DA, 0x00201), (0x111DB, 0x02010), (0x111DC, 0x00201), (0x111DD, 0x02010), (0x111E0, 0x00208),
    (0x111E1, 0x00204), (0x111F5, 0x00208), (0x11200, 0x00201), (0x11212, 0x00208), (0x11213, 0x00201), (0x1122C, 0x00202),
    (0x1122F, 0x00102), (0x11232, 0x00202), (0x11234, 0x00102), (0x11235, 0x00202), (0x11236, 0x00102), (0x11238, 0x02010),
    (0x1123E, 0x00102), (0x1123F, 0x00201), (0x11241, 0x00102), (0x11242, 0x00208), (0x11280, 0x00201), (0x11287, 0x00208),
    (0x11288, 0x00201), (0x11289, 0x00208), (0x1128A, 0x00201), (0x1128E, 0x00208), (0x1128F, 0x00201), (0x1129E, 0x00208),
    (0x1129F, 0x00201), (0x112A9, 0x02010), (0x112AA, 0x00208), (0x112B0, 0x00201), (0x112DF, 0x00102), (0x112E0, 0x00202),
    (0x112E3, 0x00102), (0x112EB, 0x00208), (0x112F0, 0x00084), (0x112FA, 0x00208), (0x11300, 0x00102), (0x11302, 0x00202),
    (0x11304, 0x00208), (0x11305, 0x00201), (0x1130D, 0x00208), (0x1130F, 0x00201), (0x11311, 0x00208), (0x11313, 0x00201),
    (0x11329, 0x00208), (0x1132A, 0x00201), (0x11331, 0x00208), (0x11332, 0x00201), (0x11334, 0x00208), (0x11335, 0x00201),
    (0x1133A, 0x00208), (0x1133B, 0x00102), (0x1133D, 0x00201), (0x1133E, 0x00202), (0x11340, 0x00102), (0x11341, 0x00202),
    (0x11345, 0x00208), (0x11347, 0x00202), (0x11349, 0x00208), (0x1134B, 0x00202), (0x1134E, 0x00208), (0x11350, 0x00201),
    (0x11351, 0x00208), (0x11357, 0x00202), (0x11358, 0x00208), (0x1135D, 0x00201), (0x11362, 0x00202), (0x11364, 0x00208),
    (0x11366, 0x00102), (0x1136D, 0x00208), (0x11370, 0x00102), (0x11375, 0x00208), (0x11400, 0x00201), (0x11435, 0x00202),
    (0x11438, 0x00102), (0x11440, 0x00202), (0x11442, 0x00102), (0x11445, 0x00202), (0x11446, 0x00102), (0x11447, 0x00201),
    (0x1144B, 0x02010), (0x11450, 0x00084), (0x1145A, 0x02010), (0x1145C, 0x00208), (0x1145D, 0x02010), (0x1145E, 0x00102),
    (0x1145F, 0x00201), (0x11462, 0x00208), (0x11480, 0x00201), (0x114B0, 0x00202), (0x114B3, 0x00102), (0x114B9, 0x00202),
    (0x114BA, 0x00102), (0x114BB, 0x00202), (0x114BF, 0x00102), (0x114C1, 0x00202), (0x114C2, 0x00102), (0x114C4, 0x00201),
    (0x114C6, 0x02010), (0x114C7, 0x00201), (0x114C8, 0x00208), (0x114D0, 0x00084), (0x114DA, 0x00208), (0x11580, 0x00201),
    (0x115AF, 0x00202), (0x115B2, 0x00102), (0x115B6, 0x00208), (0x115B8, 0x00202), (0x115BC, 0x00102), (0x115BE, 0x00202),
    (0x115BF, 0x00102), (0x115C1, 0x02010), (0x115D8, 0x00201), (0x115DC, 0x00102), (0x115DE, 0x00208), (0x11600, 0x00201),
    (0x11630, 0x00202), (0x11633, 0x00102), (0x1163B, 0x00202), (0x1163D, 0x00102), (0x1163E, 0x00202), (0x1163F, 0x00102),
    (0x11641, 0x02010), (0x11644, 0x00201), (0x11645, 0x00208), (0x11650, 0x00084), (0x1165A, 0x00208), (0x11660, 0x02010),
    (0x1166D, 0x00208), (0x11680, 0x00201), (0x116AB, 0x00102), (0x116AC, 0x00202), (0x116AD, 0x00102), (0x116AE, 0x00202),
    (0x116B0, 0x00102), (0x116B6, 0x00202), (0x116B7, 0x00102), (0x116B8, 0x00201), (0x116B9, 0x02010), (0x116BA, 0x00208),
    (0x116C0, 0x00084), (0x116CA, 0x00208), (0x11700, 0x00201), (0x1171B, 0x00208), (0x1171D, 0x00102), (0x11720, 0x00202),
    (0x11722, 0x00102), (0x11726, 0x00202), (0x11727, 0x00102), (0x1172C, 0x00208), (0x11730, 0x00084), (0x1173A, 0x00204),
    (0x1173C, 0x02010), (0x1173F, 0x00440), (0x11740, 0x00201), (0x11747, 0x00208), (0x11800, 0x00201), (0x1182C, 0x00202),
    (0x1182F, 0x00102), (0x11838, 0x00202), (0x11839, 0x00102), (0x1183B, 0x02010), (0x1183C, 0x00208), (0x118A0, 0x00801),
    (0x118C0, 0x00081), (0x118E0, 0x00084), (0x118EA, 0x00204), (0x118F3, 0x00208), (0x118FF, 0x00201), (0x11907, 0x00208),
    (0x11909, 0x00201), (0x1190A, 0x00208), (0x1190C, 0x00201), (0x11914, 0x00208), (0x11915, 0x00201), (0x11917, 0x00208),
    (0x11918, 0x00201), (0x11930, 0x00202), (0x11936, 0x00208), (0x11937, 0x00202), (0x11939, 0x00208), (0x1193B, 0x00102),
    (0x1193D, 0x00202), (0x1193E, 0x00102), (0x1193F, 0x00201), (0x11940, 0x00202), (0x11941, 0x00201), (0x11942, 0x00202),
    (0x11943, 0x00102), (0x11944, 0x02010), (0x11947, 0x00208), (0x11950, 0x00084), (0x1195A, 0x00208), (0x119A0, 0x00201),
    (0x119A8, 0x00208), (0x119AA, 0x00201), (0x119D1, 0x00202), (0x119D4, 0x00102), (0x119D8, 0x00208), (0x119DA, 0x00102),
    (0x119DC, 0x00202), (0x119E0, 0x00102), (0x119E1, 0x00201), (0x119E2, 0x02010), (0x119E3, 0x00201), (0x119E4, 0x00202),
    (0x119E5, 0x00208), (0x11A00, 0x00201), (0x11A01, 0x00102), (0x11A0B, 0x00201), (0x11A33, 0x00102), (0x11A39, 0x00202),
    (0x11A3A, 0x00201), (0x11A3B, 0x00102), (0x11A3F, 0x02010), (0x11A47, 0x00102), (0x11A48, 0x00208), (0x11A50, 0x00201),
    (0x11A51, 0x00102), (0x11A57, 0x00202), (0x11A59, 0x00102), (0x11A5C, 0x00201), (0x11A8A, 0x00102), (0x11A97, 0x00202),
    (0x11A98, 0x00102), (0x11A9A, 0x02010), (0x11A9D, 0x00201), (0x11A9E, 0x02010), (0x11AA3, 0x00208), (0x11AB0, 0x00201),
    (0x11AF9, 0x00208), (0x11B00, 0x02010), (0x11B0A, 0x00208), (0x11C00, 0x00201), (0x11C09, 0x00208), (0x11C0A, 0x00201),
    (0x11C2F, 0x00202), (0x11C30, 0x00102), (0x11C37, 0x00208), (0x11C38, 0x00102), (0x11C3E, 0x00202), (0x11C3F, 0x00102),
    (0x11C40, 0x00201), (0x11C41, 0x02010), (0x11C46, 0x00208), (0x11C50, 0x00084), (0x11C5A, 0x00204), (0x11C6D, 0x00208),
    (0x11C70, 0x02010), (0x11C72, 0x00201), (0x11C90, 0x00208), (0x11C92, 0x00102), (0x11CA8, 0x00208), (0x11CA9, 0x00202),
    (0x11CAA, 0x00102), (0x11CB1, 0x00202), (0x11CB2, 0x00102), (0x11CB4, 0x00202), (0x11CB5, 0x00102), (0x11CB7, 0x00208),
    (0x11D00, 0x00201), (0x11D07, 0x00208), (0x11D08, 0x00201), (0x11D0A, 0x00208), (0x11D0B, 0x00201), (0x11D31, 0x00102),
    (0x11D37, 0x00208), (0x11D3A, 0x00102), (0x11D3B, 0x00208), (0x11D3C, 0x00102), (0x11D3E, 0x00208), (0x11D3F, 0x00102),
    (0x11D46, 0x00201), (0x11D47, 0x00102), (0x11D48, 0x00208), (0x11D50, 0x00084), (0x11D5A, 0x00208), (0x11D60, 0x00201),
    (0x11D66, 0x00208), (0x11D67, 0x00201), (0x11D69, 0x00208), (0x11D6A, 0x00201), (0x11D8A, 0x00202), (0x11D8F, 0x00208),
    (0x11D90, 0x00102), (0x11D92, 0x00208), (0x11D93, 0x00202), (0x11D95, 0x00102), (0x11D96, 0x00202), (0x11D97, 0x00102),
    (0x11D98, 0x00201), (0x11D99, 0x00208), (0x11DA0, 0x00084), (0x11DAA, 0x00208), (0x11EE0, 0x00201), (0x11EF3, 0x00102),
    (0x11EF5, 0x00202), (0x11EF7, 0x02010), (0x11EF9, 0x00208), (0x11F00, 0x00102), (0x11F02, 0x00201), (0x11F03, 0x00202),
    (0x11F04, 0x00201), (0x11F11, 0x00208), (0x11F12, 0x00201), (0x11F34, 0x00202), (0x11F36, 0x00102), (0x11F3B, 0x00208),
    (0x11F3E, 0x00202), (0x11F40, 0x00102), (0x11F41, 0x00202), (0x11F42, 0x00102), (0x11F43, 0x02010), (0x11F50, 0x00084),
    (0x11F5A, 0x00208), (0x11FB0, 0x00201), (0x11FB1, 0x00208), (0x11FC0, 0x00204), (0x11FD5, 0x00440), (0x11FDD, 0x000C0),
    (0x11FE1, 0x00440), (0x11FF2, 0x00208), (0x11FFF, 0x02010), (0x12000, 0x00201), (0x1239A, 0x00208), (0x12400, 0x00104),
    (0x1246F, 0x00208), (0x12470, 0x02010), (0x12475, 0x00208), (0x12480, 0x00201), (0x12544, 0x00208), (0x12F90, 0x00201),
    (0x12FF1, 0x02010), (0x12FF3, 0x00208), (0x13000, 0x00201), (0x13430, 0x00108), (0x13440, 0x00102), (0x13441, 0x00201),
    (0x13447, 0x00102), (0x13456, 0x00208), (0x14400, 0x00201), (0x14647, 0x00208), (0x16800, 0x00201), (0x16A39, 0x00208),
    (0x16A40, 0x00201), (0x16A5F, 0x00208), (0x16A60, 0x00084), (0x16A6A, 0x00208), (0x16A6E, 0x02010), (0x16A70, 0x00201),
    (0x16ABF, 0x00208), (0x16AC0, 0x00084), (0x16ACA, 0x00208), (0x16AD0, 0x00201), (0x16AEE, 0x00208), (0x16AF0, 0x00102),
    (0x16AF5, 0x02010), (0x16AF6, 0x00208), (0x16B00, 0x00201), (0x16B30, 0x00102), (0x16B37, 0x02010), (0x16B3C, 0x00440),
    (0x16B40, 0x00101), (0x16B44, 0x02010), (0x16B45, 0x00440), (0x16B46, 0x00208), (0x16B50, 0x00084), (0x16B5A, 0x00208),
    (0x16B5B, 0x00204), (0x16B62, 0x00208), (0x16B63, 0x00201), (0x16B78, 0x00208), (0x16B7D, 0x00201), (0x16B90, 0x00208),
    (0x16E40, 0x00801), (0x16E60, 0x00081), (0x16E80, 0x00204), (0x16E97, 0x02010), (0x16E9B, 0x00208), (0x16F00, 0x00201),
    (0x16F4B, 0x00208), (0x16F4F, 0x00102), (0x16F50, 0x00201), (0x16F51, 0x00202), (0x16F88, 0x00208), (0x16F8F, 0x00102),
    (0x16F93, 0x00101), (0x16FA0, 0x00208), (0x16FE0, 0x10101), (0x16FE2, 0x12010), (0x16FE3, 0x10101), (0x16FE4, 0x10102),
    (0x16FE5, 0x00208), (0x16FF0, 0x10202), (0x16FF2, 0x00208), (0x17000, 0x10201), (0x187F8, 0x00208), (0x18800, 0x10201),
    (0x18CD6, 0x00208), (0x18D00, 0x10201), (0x18D09, 0x00208), (0x1AFF0, 0x10101), (0x1AFF4, 0x00208), (0x1AFF5, 0x10101),
    (0x1AFFC, 0x00208), (0x1AFFD, 0x10101), (0x1AFFF, 0x00208), (0x1B000, 0x10201), (0x1B123, 0x00208), (0x1B132, 0x10201),
    (0x1B133, 0x00208), (0x1B150, 0x10201), (0x1B153, 0x00208), (0x1B155, 0x10201), (0x1B156, 0x00208), (0x1B164, 0x10201),
    (0x1B168, 0x00208), (0x1B170, 0x10201), (0x1B2FC, 0x00208), (0x1BC00, 0x00201), (0x1BC6B, 0x00208), (0x1BC70, 0x00201),
    (0x1BC7D, 0x00208), (0x1BC80, 0x00201), (0x1BC89, 0x00208), (0x1BC90, 0x00201), (0x1BC9A, 0x00208), (0x1BC9C, 0x00440),
    (0x1BC9D, 0x00102), (0x1BC9F, 0x02010), (0x1BCA0, 0x00108), (0x1BCA4, 0x00208), (0x1CF00, 0x00102), (0x1CF2E, 0x00208),
    (0x1CF30, 0x00102), (0x1CF47, 0x00208), (0x1CF50, 0x00440), (0x1CFC4, 0x00208), (0x1D000, 0x00440), (0x1D0F6, 0x00208),
    (0x1D100, 0x00440), (0x1D127, 0x00208), (0x1D129, 0x00440), (0x1D165, 0x00202), (0x1D167, 0x00102), (0x1D16A, 0x00440),
    (0x1D16D, 0x00202), (0x1D173, 0x00108), (0x1D17B, 0x00102), (0x1D183, 0x00440), (0x1D185, 0x00102), (0x1D18C, 0x00440),
    (0x1D1AA, 0x00102), (0x1D1AE, 0x00440), (0x1D1EB, 0x00208), (0x1D200, 0x00440), (0x1D242, 0x00102), (0x1D245, 0x00440),
    (0x1D246, 0x00208), (0x1D2C0, 0x00204), (0x1D2D4, 0x00208), (0x1D2E0, 0x00204), (0x1D2F4, 0x00208), (0x1D300, 0x00440),
    (0x1D357, 0x00208), (0x1D360, 0x00204), (0x1D379, 0x00208), (0x1D400, 0x00801), (0x1D41A, 0x00081), (0x1D434, 0x00801),
    (0x1D44E, 0x00081), (0x1D455, 0x00208), (0x1D456, 0x00081), (0x1D468, 0x00801), (0x1D482, 0x00081), (0x1D49C, 0x00801),
    (0x1D49D, 0x00208), (0x1D49E, 0x00801), (0x1D4A0, 0x00208), (0x1D4A2, 0x00801), (0x1D4A3, 0x00208), (0x1D4A5, 0x00801),
    (0x1D4A7, 0x00208), (0x1D4A9, 0x00801), (0x1D4AD, 0x00208), (0x1D4AE, 0x00801), (0x1D4B6, 0x00081), (0x1D4BA, 0x00208),
    (0x1D4BB, 0x00081), (0x1D4BC, 0x00208), (0x1D4BD, 0x00081), (0x1D4C4, 0x00208), (0x1D4C5, 0x00081), (0x1D4D0, 0x00801),
    (0x1D4EA, 0x00081), (0x1D504, 0x00801), (0x1D506, 0x00208), (0x1D507, 0x00801), (0x1D50B, 0x00208), (0x1D50D, 0x00801),
    (0x1D515, 0x00208), (0x1D516, 0x00801), (0x1D51D, 0x00208), (0x1D51E, 0x00081), (0x1D538, 0x00801), (0x1D53A, 0x00208),
    (0x1D53B, 0x00801), (0x1D53F, 0x00208), (0x1D540, 0x00801), (0x1D545, 0x00208), (0x1D546, 0x00801), (0x1D547, 0x00208),
    (0x1D54A, 0x00801), (0x1D551, 0x00208), (0x1D552, 0x00081), (0x1D56C, 0x00801), (0x1D586, 0x00081), (0x1D5A0, 0x00801),
    (0x1D5BA, 0x00081), (0x1D5D4, 0x00801), (0x1D5EE, 0x00081), (0x1D608, 0x00801), (0x1D622, 0x00081), (0x1D63C, 0x00801),
    (0x1D656, 0x00081), (0x1D670, 0x00801), (0x1D68A, 0x00081), (0x1D6A6, 0x00208), (0x1D6A8, 0x00801), (0x1D6C1, 0x00140),
    (0x1D6C2, 0x00081), (0x1D6DB, 0x00140), (0x1D6DC, 0x00081), (0x1D6E2, 0x00801), (0x1D6FB, 0x00140), (0x1D6FC, 0x00081),
    (0x1D715, 0x00140), (0x1D716, 0x00081), (0x1D71C, 0x00801), (0x1D735, 0x00140), (0x1D736, 0x00081), (0x1D74F, 0x00140),
    (0x1D750, 0x00081), (0x1D756, 0x00801), (0x1D76F, 0x00140), (0x1D770, 0x00081), (0x1D789, 0x00140), (0x1D78A, 0x00081),
    (0x1D790, 0x00801), (0x1D7A9, 0x00140), (0x1D7AA, 0x00081), (0x1D7C3, 0x00140), (0x1D7C4, 0x00081), (0x1D7CA, 0x00801),
    (0x1D7CB, 0x00081), (0x1D7CC, 0x00208), (0x1D7CE, 0x00084), (0x1D800, 0x00440), (0x1DA00, 0x00102), (0x1DA37, 0x00440),
    (0x1DA3B, 0x00102), (0x1DA6D, 0x00440), (0x1DA75, 0x00102), (0x1DA76, 0x00440), (0x1DA84, 0x00102), (0x1DA85, 0x00440),
    (0x1DA87, 0x02010), (0x1DA8C, 0x00208), (0x1DA9B, 0x00102), (0x1DAA0, 0x00208), (0x1DAA1, 0x00102), (0x1DAB0, 0x00208),
    (0x1DF00, 0x00081), (0x1DF0A, 0x00201), (0x1DF0B, 0x00081), (0x1DF1F, 0x00208), (0x1DF25, 0x00081), (0x1DF2B, 0x00208),
    (0x1E000, 0x00102), (0x1E007, 0x00208), (0x1E008, 0x00102), (0x1E019, 0x00208), (0x1E01B, 0x00102), (0x1E022, 0x00208),
    (0x1E023, 0x00102), (0x1E025, 0x00208), (0x1E026, 0x00102), (0x1E02B, 0x00208), (0x1E030, 0x00101), (0x1E06E, 0x00208),
    (0x1E08F, 0x00102), (0x1E090, 0x00208), (0x1E100, 0x00201), (0x1E12D, 0x00208), (0x1E130, 0x00102), (0x1E137, 0x00101),
    (0x1E13E, 0x00208), (0x1E140, 0x00084), (0x1E14A, 0x00208), (0x1E14E, 0x00201), (0x1E14F, 0x00440), (0x1E150, 0x00208),
    (0x1E290, 0x00201), (0x1E2AE, 0x00102), (0x1E2AF, 0x00208), (0x1E2C0, 0x00201), (0x1E2EC, 0x00102), (0x1E2F0, 0x00084),
    (0x1E2FA, 0x00208), (0x1E2FF, 0x000C0), (0x1E300, 0x00208), (0x1E4D0, 0x00201), (0x1E4EB, 0x00101), (0x1E4EC, 0x00102),
    (0x1E4F0, 0x00084), (0x1E4FA, 0x00208), (0x1E7E0, 0x00201), (0x1E7E7, 0x00208), (0x1E7E8, 0x00201), (0x1E7EC, 0x00208),
    (0x1E7ED, 0x00201), (0x1E7EF, 0x00208), (0x1E7F0, 0x00201), (0x1E7FF, 0x00208), (0x1E800, 0x00201), (0x1E8C5, 0x00208),
    (0x1E8C7, 0x00204), (0x1E8D0, 0x00102), (0x1E8D7, 0x00208), (0x1E900, 0x00801), (0x1E922, 0x00081), (0x1E944, 0x00102),
    (0x1E94B, 0x00101), (0x1E94C, 0x00208), (0x1E950, 0x00084), (0x1E95A, 0x00208), (0x1E95E, 0x02010), (0x1E960, 0x00208),
    (0x1EC71, 0x00204), (0x1ECAC, 0x00440), (0x1ECAD, 0x00204), (0x1ECB0, 0x000C0), (0x1ECB1, 0x00204), (0x1ECB5, 0x00208),
    (0x1ED01, 0x00204), (0x1ED2E, 0x00440), (0x1ED2F, 0x00204), (0x1ED3E, 0x00208), (0x1EE00, 0x00201), (0x1EE04, 0x00208),
    (0x1EE05, 0x00201), (0x1EE20, 0x00208), (0x1EE21, 0x00201), (0x1EE23, 0x00208), (0x1EE24, 0x00201), (0x1EE25, 0x00208),
    (0x1EE27, 0x00201), (0x1EE28, 0x00208), (0x1EE29, 0x00201), (0x1EE33, 0x00208), (0x1EE34, 0x00201), (0x1EE38, 0x00208),
    (0x1EE39, 0x00201), (0x1EE3A, 0x00208), (0x1EE3B, 0x00201), (0x1EE3C, 0x00208), (0x1EE42, 0x00201), (0x1EE43, 0x00208),
    (0x1EE47, 0x00201), (0x1EE48, 0x00208), (0x1EE49, 0x00201), (0x1EE4A, 0x00208), (0x1EE4B, 0x00201), (0x1EE4C, 0x00208),
    (0x1EE4D, 0x00201), (0x1EE50, 0x00208), (0x1EE51, 0x00201), (0x1EE53, 0x00208), (0x1EE54, 0x00201), (0x1EE55, 0x00208),
    (0x1EE57, 0x00201), (0x1EE58, 0x00208), (0x1EE59, 0x00201), (0x1EE5A, 0x00208), (0x1EE5B, 0x00201), (0x1EE5C, 0x00208),
    (0x1EE5D, 0x00201), (0x1EE5E, 0x00208), (0x1EE5F, 0x00201), (0x1EE60, 0x00208), (0x1EE61, 0x00201), (0x1EE63, 0x00208),
    (0x1EE64, 0x00201), (0x1EE65, 0x00208), (0x1EE67, 0x00201), (0x1EE6B, 0x00208), (0x1EE6C, 0x00201), (0x1EE73, 0x00208),
    (0x1EE74, 0x00201), (0x1EE78, 0x00208), (0x1EE79, 0x00201), (0x1EE7D, 0x00208), (0x1EE7E, 0x00201), (0x1EE7F, 0x00208),
    (0x1EE80, 0x00201), (0x1EE8A, 0x00208), (0x1EE8B, 0x00201), (0x1EE9C, 0x00208), (0x1EEA1, 0x00201), (0x1EEA4, 0x00208),
    (0x1EEA5, 0x00201), (0x1EEAA, 0x00208), (0x1EEAB, 0x00201), (0x1EEBC, 0x00208), (0x1EEF0, 0x00140), (0x1EEF2, 0x00208),
    (0x1F000, 0x04440), (0x1F004, 0x14440), (0x1F005, 0x04440), (0x1F02C, 0x04208), (0x1F030, 0x04440), (0x1F094, 0x04208),
    (0x1F0A0, 0x04440), (0x1F0AF, 0x04208), (0x1F0B1, 0x04440), (0x1F0C0, 0x04208), (0x1F0C1, 0x04440), (0x1F0CF, 0x14440),
    (0x1F0D0, 0x04208), (0x1F0D1, 0x04440), (0x1F0F6, 0x04208), (0x1F100, 0x00204), (0x1F10D, 0x04440), (0x1F110, 0x00440),
    (0x1F12F, 0x04440), (0x1F130, 0x00440), (0x1F16C, 0x04440), (0x1F172, 0x00440), (0x1F17E, 0x04440), (0x1F180, 0x00440),
    (0x1F18E, 0x14440), (0x1F18F, 0x00440), (0x1F191, 0x14440), (0x1F19B, 0x00440), (0x1F1AD, 0x04440), (0x1F1AE, 0x04208),
    (0x1F1E6, 0x08440), (0x1F200, 0x10440), (0x1F201, 0x14440), (0x1F203, 0x04208), (0x1F210, 0x10440), (0x1F21A, 0x14440),
    (0x1F21B, 0x10440), (0x1F22F, 0x14440), (0x1F230, 0x10440), (0x1F232, 0x14440), (0x1F23B, 0x10440), (0x1F23C, 0x04208),
    (0x1F240, 0x10440), (0x1F249, 0x04208), (0x1F250, 0x14440), (0x1F252, 0x04208), (0x1F260, 0x14440), (0x1F266, 0x04208),
    (0x1F300, 0x14440), (0x1F321, 0x04440), (0x1F32D, 0x14440), (0x1F336, 0x04440), (0x1F337, 0x14440), (0x1F37D, 0x04440),
    (0x1F37E, 0x14440), (0x1F394, 0x04440), (0x1F3A0, 0x14440), (0x1F3CB, 0x04440), (0x1F3CF, 0x14440), (0x1F3D4, 0x04440),
    (0x1F3E0, 0x14440), (0x1F3F1, 0x04440), (0x1F3F4, 0x14440), (0x1F3F5, 0x04440), (0x1F3F8, 0x14440), (0x1F3FB, 0x10240),
    (0x1F400, 0x14440), (0x1F43F, 0x04440), (0x1F440, 0x14440), (0x1F441, 0x04440), (0x1F442, 0x14440), (0x1F4FD, 0x04440),
    (0x1F4FF, 0x14440), (0x1F53E, 0x00440), (0x1F546, 0x04440), (0x1F54B, 0x14440), (0x1F54F, 0x04440), (0x1F550, 0x14440),
    (0x1F568, 0x04440), (0x1F57A, 0x14440), (0x1F57B, 0x04440), (0x1F595, 0x14440), (0x1F597, 0x04440), (0x1F5A4, 0x14440),
    (0x1F5A5, 0x04440), (0x1F5FB, 0x14440), (0x1F650, 0x00440), (0x1F680, 0x14440), (0x1F6C6, 0x04440), (0x1F6CC, 0x14440),
    (0x1F6CD, 0x04440), (0x1F6D0, 0x14440), (0x1F6D3, 0x04440), (0x1F6D5, 0x14440), (0x1F6D8, 0x04208), (0x1F6DC, 0x14440),
    (0x1F6E0, 0x04440), (0x1F6EB, 0x14440), (0x1F6ED, 0x04208), (0x1F6F0, 0x04440), (0x1F6F4, 0x14440), (0x1F6FD, 0x04208),
    (0x1F700, 0x00440), (0x1F774, 0x04440), (0x1F777, 0x04208), (0x1F77B, 0x04440), (0x1F780, 0x00440), (0x1F7D5, 0x04440),
    (0x1F7DA, 0x04208), (0x1F7E0, 0x14440), (0x1F7EC, 0x04208), (0x1F7F0, 0x14440), (0x1F7F1, 0x04208), (0x1F800, 0x00440),
    (0x1F80C, 0x04208), (0x1F810, 0x00440), (0x1F848, 0x04208), (0x1F850, 0x00440), (0x1F85A, 0x04208), (0x1F860, 0x00440),
    (0x1F888, 0x04208), (0x1F890, 0x00440), (0x1F8AE, 0x04208), (0x1F8B0, 0x04440), (0x1F8B2, 0x04208), (0x1F900, 0x00440),
    (0x1F90C, 0x14440), (0x1F93B, 0x00440), (0x1F93C, 0x14440), (0x1F946, 0x00440), (0x1F947, 0x14440), (0x1FA00, 0x04440),
    (0x1FA54, 0x04208), (0x1FA60, 0x04440), (0x1FA6E, 0x04208), (0x1FA70, 0x14440), (0x1FA7D, 0x04208), (0x1FA80, 0x14440),
    (0x1FA89, 0x04208), (0x1FA90, 0x14440), (0x1FABE, 0x04208), (0x1FABF, 0x14440), (0x1FAC6, 0x04208), (0x1FACE, 0x14440),
    (0x1FADC, 0x04208), (0x1FAE0, 0x14440), (0x1FAE9, 0x04208), (0x1FAF0, 0x14440), (0x1FAF9, 0x04208), (0x1FB00, 0x00440),
    (0x1FB93, 0x00208), (0x1FB94, 0x00440), (0x1FBCB, 0x00208), (0x1FBF0, 0x00084), (0x1FBFA, 0x00208), (0x1FC00, 0x04208),
    (0x1FFFE, 0x00208), (0x20000, 0x10201), (0x2A6E0, 0x10208), (0x2A700, 0x10201), (0x2B73A, 0x10208), (0x2B740, 0x10201),
    (0x2B81E, 0x10208), (0x2B820, 0x10201), (0x2CEA2, 0x10208), (0x2CEB0, 0x10201), (0x2EBE1, 0x10208), (0x2EBF0, 0x10201),
    (0x2EE5E, 0x10208), (0x2F800, 0x10201), (0x2FA1E, 0x10208), (0x2FFFE, 0x00208), (0x30000, 0x10201), (0x3134B, 0x10208),
    (0x31350, 0x10201), (0x323B0, 0x10208), (0x3FFFE, 0x00208), (0xE0001, 0x00108), (0xE0002, 0x00208), (0xE0020, 0x00108),
    (0xE0080, 0x00208), (0xE0100, 0x00102), (0xE01F0, 0x00208), (0xF0000, 0x00408), (0xFFFFE, 0x00208), (0x100000, 0x00408),
    (0x10FFFE, 0x00208),
];

pub(crate) static CATEGORY_ASCII: [u32; 128] = [
    0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088,
    0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088,
    0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088,
    0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088, 0x00088,
    0x00220, 0x02010, 0x02010, 0x02010, 0x000C0, 0x02010, 0x02010, 0x02010,
    0x01010, 0x00090, 0x02010, 0x00140, 0x02010, 0x00210, 0x02010, 0x02010,
    0x00084, 0x00084, 0x00084, 0x00084, 0x00084, 0x00084, 0x00084, 0x00084,
    0x00084, 0x00084, 0x02010, 0x02010, 0x00140, 0x00140, 0x00140, 0x02010,
    0x02010, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801,
    0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801,
    0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801, 0x00801,
    0x00801, 0x00801, 0x00801, 0x01010, 0x02010, 0x00090, 0x00240, 0x00110,
    0x00240, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081,
    0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081,
    0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081, 0x00081,
    0x00081, 0x00081, 0x00081, 0x01010, 0x00140, 0x00090, 0x00140, 0x00088,
];

/// Codepoints whose full case folding is a single different codepoint
pub(crate) static SIMPLE_FOLDS: &[(char, char)] = &[
    ('\u{00B5}', '\u{03BC}'), ('\u{00C0}', '\u{00E0}'), ('\u{00C1}', '\u{00E1}'), ('\u{00C2}', '\u{00E2}'), ('\u{00C3}', '\u{00E3}'),
    ('\u{00C4}', '\u{00E4}'), ('\u{00C5}', '\u{00E5}'), ('\u{00C6}', '\u{00E6}'), ('\u{00C7}', '\u{00E7}'), ('\u{00C8}', '\u{00E8}'),
    ('\u{00C9}', '\u{00E9}'), ('\u{00CA}', '\u{00EA}'), ('\u{00CB}', '\u{00EB}'), ('\u{00CC}', '\u{00EC}'), ('\u{00CD}', '\u{00ED}'),
    ('\u{00CE}', '\u{00EE}'), ('\u{00CF}', '\u{00EF}'), ('\u{00D0}', '\u{00F0}'), ('\u{00D1}', '\u{00F1}'), ('\u{00D2}', '\u{00F2}'),
    ('\u{00D3}', '\u{00F3}'), ('\u{00D4}', '\u{00F4}'), ('\u{00D5}', '\u{00F5}'), ('\u{00D6}', '\u{00F6}'), ('\u{00D8}', '\u{00F8}'),
    ('\u{00D9}', '\u{00F9}'), ('\u{00DA}', '\u{00FA}'), ('\u{00DB}', '\u{00FB}'), ('\u{00DC}', '\u{00FC}'), ('\u{00DD}', '\u{00FD}'),
    ('\u{00DE}', '\u{00FE}'), ('\u{0100}', '\u{0101}'), ('\u{0102}', '\u{0103}'), ('\u{0104}', '\u{0105}'), ('\u{0106}', '\u{0107}'),
    ('\u{0108}', '\u{0109}'), ('\u{010A}', '\u{010B}'), ('\u{010C}', '\u{010D}'), ('\u{010E}', '\u{010F}'), ('\u{0110}', '\u{0111}'),
    ('\u{0112}', '\u{0113}'), ('\u{0114}', '\u{0115}'), ('\u{0116}', '\u{0117}'), ('\u{0118}', '\u{0119}'), ('\u{011A}', '\u{011B}'),
    ('\u{011C}', '\u{011D}'), ('\u{011E}', '\u{011F}'), ('\u{0120}', '\u{0121}'), ('\u{0122}', '\u{0123}'), ('\u{0124}', '\u{0125}'),
    ('\u{0126}', '\u{0127}'), ('\u{0128}', '\u{0129}'), ('\u{012A}', '\u{012B}'), ('\u{012C}', '\u{012D}'), ('\u{012E}', '\u{012F}'),
    ('\u{0132}', '\u{0133}'), ('\u{0134}', '\u{0135}'), ('\u{0136}', '\u{0137}'), ('\u{0139}', '\u{013A}'), ('\u{013B}', '\u{013C}'),
    ('\u{013D}', '\u{013E}'), ('\u{013F}', '\u{0140}'), ('\u{0141}', '\u{0142}'), ('\u{0143}', '\u{0144}'), ('\u{0145}', '\u{0146}'),
    ('\u{0147}', '\u{0148}'), ('\u{014A}', '\u{014B}'), ('\u{014C}', '\u{014D}'), ('\u{014E}', '\u{014F}'), ('\u{0150}', '\u{0151}'),
    ('\u{0152}', '\u{0153}'), ('\u{0154}', '\u{0155}'), ('\u{0156}', '\u{0157}'), ('\u{0158}', '\u{0159}'), ('\u{015A}', '\u{015B}'),
    ('\u{015C}', '\u{015D}'), ('\u{015E}', '\u{015F}'), ('\u{0160}', '\u{0161}'), ('\u{0162}', '\u{0163}'), ('\u{0164}', '\u{0165}'),
    ('\u{0166}', '\u{0167}'), ('\u{0168}', '\u{0169}'), ('\u{016A}', '\u{016B}'), ('\u{016C}', '\u{016D}'), ('\u{016E}', '\u{016F}'),
    ('\u{0170}', '\u{0171}'), ('\u{0172}', '\u{0173}'), ('\u{0174}', '\u{0175}'), ('\u{0176}', '\u{0177}'), ('\u{0178}', '\u{00FF}'),
    ('\u{0179}', '\u{017A}'), ('\u{017B}', '\u{017C}'), ('\u{017D}', '\u{017E}'), ('\u{017F}', '\u{0073}'), ('\u{0181}', '\u{0253}'),
    ('\u{0182}', '\u{0183}'), ('\u{0184}', '\u{0185}'), ('\u{0186}', '\u{0254}'), ('\u{0187}', '\u{0188}'), ('\u{0189}', '\u{0256}'),
    ('\u{018A}', '\u{0257}'), ('\u{018B}', '\u{018C}'), ('\u{018E}', '\u{01DD}'), ('\u{018F}', '\u{0259}'), ('\u{0190}', '\u{025B}'),
    ('\u{0191}', '\u{0192}'), ('\u{0193}', '\u{0260}'), ('\u{0194}', '\u{0263}'), ('\u{0196}', '\u{0269}'), ('\u{0197}', '\u{0268}'),
    ('\u{0198}', '\u{0199}'), ('\u{019C}', '\u{026F}'), ('\u{019D}', '\u{0272}'), ('\u{019F}', '\u{0275}'), ('\u{01A0}', '\u{01A1}'),
    ('\u{01A2}', '\u{01A3}'), ('\u{01A4}', '\u{01A5}'), ('\u{01A6}', '\u{0280}'), ('\u{01A7}', '\u{01A8}'), ('\u{01A9}', '\u{0283}'),
    ('\u{01AC}', '\u{01AD}'), ('\u{01AE}', '\u{0288}'), ('\u{01AF}', '\u{01B0}'), ('\u{01B1}', '\u{028A}'), ('\u{01B2}', '\u{028B}'),
    ('\u{01B3}', '\u{01B4}'), ('\u{01B5}', '\u{01B6}'), ('\u{01B7}', '\u{0292}'), ('\u{01B8}', '\u{01B9}'), ('\u{01BC}', '\u{01BD}'),
    ('\u{01C4}', '\u{01C6}'), ('\u{01C5}', '\u{01C6}'), ('\u{01C7}', '\u{01C9}'), ('\u{01C8}', '\u{01C9}'), ('\u{01CA}', '\u{01CC}'),
    ('\u{01CB}', '\u{01CC}'), ('\u{01CD}', '\u{01CE}'), ('\u{01CF}', '\u{01D0}'), ('\u{01D1}', '\u{01D2}'), ('\u{01D3}', '\u{01D4}'),
    ('\u{01D5}', '\u{01D6}'), ('\u{01D7}', '\u{01D8}'), ('\u{01D9}', '\u{01DA}'), ('\u{01DB}', '\u{01DC}'), ('\u{01DE}', '\u{01DF}'),
    ('\u{01E0}', '\u{01E1}'), ('\u{01E2}', '\u{01E3}'), ('\u{01E4}', '\u{01E5}'), ('\u{01E6}', '\u{01E7}'), ('\u{01E8}', '\u{01E9}'),
    ('\u{01EA}', '\u{01EB}'), ('\u{01EC}', '\u{01ED}'), ('\u{01EE}', '\u{01EF}'), ('\u{01F1}', '\u{01F3}'), ('\u{01F2}', '\u{01F3}'),
    ('\u{01F4}', '\u{01F5}'), ('\u{01F6}', '\u{0195}'), ('\u{01F7}', '\u{01BF}'), ('\u{01F8}', '\u{01F9}'), ('\u{01FA}', '\u{01FB}'),
    ('\u{01FC}', '\u{01FD}'), ('\u{01FE}', '\u{01FF}'), ('\u{0200}', '\u{0201}'), ('\u{0202}', '\u{0203}'), ('\u{0204}', '\u{0205}'),
    ('\u{0206}', '\u{0207}'), ('\u{0208}', '\u{0209}'), ('\u{020A}', '\u{020B}'), ('\u{020C}', '\u{020D}'), ('\u{020E}', '\u{020F}'),
    ('\u{0210}', '\u{0211}'), ('\u{0212}', '\u{0213}'), ('\u{0214}', '\u{0215}'), ('\u{0216}', '\u{0217}'), ('\u{0218}', '\u{0219}'),
    ('\u{021A}', '\u{021B}'), ('\u{021C}', '\u{021D}'), ('\u{021E}', '\u{021F}'), ('\u{0220}', '\u{019E}'), ('\u{0222}', '\u{0223}'),
    ('\u{0224}', '\u{0225}'), ('\u{0226}', '\u{0227}'), ('\u{0228}', '\u{0229}'), ('\u{022A}', '\u{022B}'), ('\u{022C}', '\u{022D}'),
    ('\u{022E}', '\u{022F}'), ('\u{0230}', '\u{0231}'), ('\u{0232}', '\u{0233}'), ('\u{023A}', '\u{2C65}'), ('\u{023B}', '\u{023C}'),
    ('\u{023D}', '\u{019A}'), ('\u{023E}', '\u{2C66}'), ('\u{0241}', '\u{0242}'), ('\u{0243}', '\u{0180}'), ('\u{0244}', '\u{0289}'),
    ('\u{0245}', '\u{028C}'), ('\u{0246}', '\u{0247}'), ('\u{0248}', '\u{0249}'), ('\u{024A}', '\u{024B}'), ('\u{024C}', '\u{024D}'),
    ('\u{024E}', '\u{024F}'), ('\u{0345}', '\u{03B9}'), ('\u{0370}', '\u{0371}'), ('\u{0372}', '\u{0373}'), ('\u{0376}', '\u{0377}'),
    ('\u{037F}', '\u{03F3}'), ('\u{0386}', '\u{03AC}'), ('\u{0388}', '\u{03AD}'), ('\u{0389}', '\u{03AE}'), ('\u{038A}', '\u{03AF}'),
    ('\u{038C}', '\u{03CC}'), ('\u{038E}', '\u{03CD}'), ('\u{038F}', '\u{03CE}'), ('\u{0391}', '\u{03B1}'), ('\u{0392}', '\u{03B2}'),
    ('\u{0393}', '\u{03B3}'), ('\u{0394}', '\u{03B4}'), ('\u{0395}', '\u{03B5}'), ('\u{0396}', '\u{03B6}'), ('\u{0397}', '\u{03B7}'),
    ('\u{0398}', '\u{03B8}'), ('\u{0399}', '\u{03B9}'), ('\u{039A}', '\u{03BA}'), ('\u{039B}', '\u{03BB}'), ('\u{039C}', '\u{03BC}'),
    ('\u{039D}', '\u{03BD}'), ('\u{039E}', '\u{03BE}'), ('\u{039F}', '\u{03BF}'), ('\u{03A0}', '\u{03C0}'), ('\u{03A1}', '\u{03C1}'),
    ('\u{03A3}', '\u{03C3}'), ('\u{03A4}', '\u{03C4}'), ('\u{03A5}', '\u{03C5}'), ('\u{03A6}', '\u{03C6}'), ('\u{03A7}', '\u{03C7}'),
    ('\u{03A8}', '\u{03C8}'), ('\u{03A9}', '\u{03C9}'), ('\u{03AA}', '\u{03CA}'), ('\u{03AB}', '\u{03CB}'), ('\u{03C2}', '\u{03C3}'),
    ('\u{03CF}', '\u{03D7}'), ('\u{03D0}', '\u{03B2}'), ('\u{03D1}', '\u{03B8}'), ('\u{03D5}', '\u{03C6}'), ('\u{03D6}', '\u{03C0}'),
    ('\u{03D8}', '\u{03D9}'), ('\u{03DA}', '\u{03DB}'), ('\u{03DC}', '\u{03DD}'), ('\u{03DE}', '\u{03DF}'), ('\u{03E0}', '\u{03E1}'),
    ('\u{03E2}', '\u{03E3}'), ('\u{03E4}', '\u{03E5}'), ('\u{03E6}', '\u{03E7}'), ('\u{03E8}', '\u{03E9}'), ('\u{03EA}', '\u{03EB}'),
    ('\u{03EC}', '\u{03ED}'), ('\u{03EE}', '\u{03EF}'), ('\u{03F0}', '\u{03BA}'), ('\u{03F1}', '\u{03C1}'), ('\u{03F4}', '\u{03B8}'),
    ('\u{03F5}', '\u{03B5}'), ('\u{03F7}', '\u{03F8}'), ('\u{03F9}', '\u{03F2}'), ('\u{03FA}', '\u{03FB}'), ('\u{03FD}', '\u{037B}'),
    ('\u{03FE}', '\u{037C}'), ('\u{03FF}', '\u{037D}'), ('\u{0400}', '\u{0450}'), ('\u{0401}', '\u{0451}'), ('\u{0402}', '\u{0452}'),
    ('\u{0403}', '\u{0453}'), ('\u{0404}', '\u{0454}'), ('\u{0405}', '\u{0455}'), ('\u{0406}', '\u{0456}'), ('\u{0407}', '\u{0457}'),
    ('\u{0408}', '\u{0458}'), ('\u{0409}', '\u{0459}'), ('\u{040A}', '\u{045A}'), ('\u{040B}', '\u{045B}'), ('\u{040C}', '\u{045C}'),
    ('\u{040D}', '\u{045D}'), ('\u{040E}', '\u{045E}'), ('\u{040F}', '\u{045F}'), ('\u{0410}', '\u{0430}'), ('\u{0411}', '\u{0431}'),
    ('\u{0412}', '\u{0432}'), ('\u{0413}', '\u{0433}'), ('\u{0414}', '\u{0434}'), ('\u{0415}', '\u{0435}'), ('\u{0416}', '\u{0436}'),
    ('\u{0417}', '\u{0437}'), ('\u{0418}', '\u{0438}'), ('\u{0419}', '\u{0439}'), ('\u{041A}', '\u{043A}'), ('\u{041B}', '\u{043B}'),
    ('\u{041C}', '\u{043C}'), ('\u{041D}', '\u{043D}'), ('\u{041E}', '\u{043E}'), ('\u{041F}', '\u{043F}'), ('\u{0420}', '\u{0440}'),
    ('\u{0421}', '\u{0441}'), ('\u{0422}', '\u{0442}'), ('\u{0423}', '\u{0443}'), ('\u{0424}', '\u{0444}'), ('\u{0425}', '\u{0445}'),
    ('\u{0426}', '\u{0446}'), ('\u{0427}', '\u{0447}'), ('\u{0428}', '\u{0448}'), ('\u{0429}', '\u{0449}'), ('\u{042A}', '\u{044A}'),
    ('\u{042B}', '\u{044B}'), ('\u{042C}', '\u{044C}'), ('\u{042D}', '\u{044D}'), ('\u{042E}', '\u{044E}'), ('\u{042F}', '\u{044F}'),
    ('\u{0460}', '\u{0461}'), ('\u{0462}', '\u{0463}'), ('\u{0464}', '\u{0465}'), ('\u{0466}', '\u{0467}'), ('\u{0468}', '\u{0469}'),
    ('\u{046A}', '\u{046B}'), ('\u{046C}', '\u{046D}'), ('\u{046E}', '\u{046F}'), ('\u{0470}', '\u{0471}'), ('\u{0472}', '\u{0473}'),
    ('\u{0474}', '\u{0475}'), ('\u{0476}', '\u{0477}'), ('\u{0478}', '\u{0479}'), ('\u{047A}', '\u{047B}'), ('\u{047C}', '\u{047D}'),
    ('\u{047E}', '\u{047F}'), ('\u{0480}', '\u{0481}'), ('\u{048A}', '\u{048B}'), ('\u{048C}', '\u{048D}'), ('\u{048E}', '\u{048F}'),
    ('\u{0490}', '\u{0491}'), ('\u{0492}', '\u{0493}'), ('\u{0494}', '\u{0495}'), ('\u{0496}', '\u{0497}'), ('\u{0498}', '\u{0499}'),
    ('\u{049A}', '\u{049B}'), ('\u{049C}', '\u{049D}'), ('\u{049E}', '\u{049F}'), ('\u{04A0}', '\u{04A1}'), ('\u{04A2}', '\u{04A3}'),
    ('\u{04A4}', '\u{04A5}'), ('\u{04A6}', '\u{04A7}'), ('\u{04A8}', '\u{04A9}'), ('\u{04AA}', '\u{04AB}'), ('\u{04AC}', '\u{04AD}'),
    ('\u{04AE}', '\u{04AF}'), ('\u{04B0}', '\u{04B1}'), ('\u{04B2}', '\u{04B3}'), ('\u{04B4}', '\u{04B5}'), ('\u{04B6}', '\u{04B7}'),
    ('\u{04B8}', '\u{04B9}'), ('\u{04BA}', '\u{04BB}'), ('\u{04BC}', '\u{04BD}'), ('\u{04BE}', '\u{04BF}'), ('\u{04C0}', '\u{04CF}'),
    ('\u{04C1}', '\u{04C2}'), ('\u{04C3}', '\u{04C4}'), ('\u{04C5}', '\u{04C6}'), ('\u{04C7}', '\u{04C8}'), ('\u{04C9}', '\u{04CA}'),
    ('\u{04CB}', '\u{04CC}'), ('\u{04CD}', '\u{04CE}'), ('\u{04D0}', '\u{04D1}'), ('\u{04D2}', '\u{04D3}'), ('\u{04D4}', '\u{04D5}'),
    ('\u{04D6}', '\u{04D7}'), ('\u{04D8}', '\u{04D9}'), ('\u{04DA}', '\u{04DB}'), ('\u{04DC}', '\u{04DD}'), ('\u{04DE}', '\u{04DF}'),
    ('\u{04E0}', '\u{04E1}'), ('\u{04E2}', '\u{04E3}'), ('\u{04E4}', '\u{04E5}'), ('\u{04E6}', '\u{04E7}'), ('\u{04E8}', '\u{04E9}'),
    ('\u{04EA}', '\u{04EB}'), ('\u{04EC}', '\u{04ED}'), ('\u{04EE}', '\u{04EF}'), ('\u{04F0}', '\u{04F1}'), ('\u{04F2}', '\u{04F3}'),
    ('\u{04F4}', '\u{04F5}'), ('\u{04F6}', '\u{04F7}'), ('\u{04F8}', '\u{04F9}'), ('\u{04FA}', '\u{04FB}'), ('\u{04FC}', '\u{04FD}'),
    ('\u{04FE}', '\u{04FF}'), ('\u{0500}', '\u{0501}'), ('\u{0502}', '\u{0503}'), ('\u{0504}', '\u{0505}'), ('\u{0506}', '\u{0507}'),
    ('\u{0508}', '\u{0509}'), ('\u{050A}', '\u{050B}'), ('\u{050C}', '\u{050D}'), ('\u{050E}', '\u{050F}'), ('\u{0510}', '\u{0511}'),
    ('\u{0512}', '\u{0513}'), ('\u{0514}', '\u{0515}'), ('\u{0516}', '\u{0517}'), ('\u{0518}', '\u{0519}'), ('\u{051A}', '\u{051B}'),
    ('\u{051C}', '\u{051D}'), ('\u{051E}', '\u{051F}'), ('\u{0520}', '\u{0521}'), ('\u{0522}', '\u{0523}'), ('\u{0524}', '\u{0525}'),
    ('\u{0526}', '\u{0527}'), ('\u{0528}', '\u{0529}'), ('\u{052A}', '\u{052B}'), ('\u{052C}', '\u{052D}'), ('\u{052E}', '\u{052F}'),
    ('\u{0531}', '\u{0561}'), ('\u{0532}', '\u{0562}'), ('\u{0533}', '\u{0563}'), ('\u{0534}', '\u{0564}'), ('\u{0535}', '\u{0565}'),
    ('\u{0536}', '\u{0566}'), ('\u{0537}', '\u{0567}'), ('\u{0538}', '\u{0568}'), ('\u{0539}', '\u{0569}'), ('\u{053A}', '\u{056A}'),
    ('\u{053B}', '\u{056B}'), ('\u{053C}', '\u{056C}'), ('\u{053D}', '\u{056D}'), ('\u{053E}', '\u{056E}'), ('\u{053F}', '\u{056F}'),
    ('\u{0540}', '\u{0570}'), ('\u{0541}', '\u{0571}'), ('\u{0542}', '\u{0572}'), ('\u{0543}', '\u{0573}'), ('\u{0544}', '\u{0574}'),
    ('\u{0545}', '\u{0575}'), ('\u{0546}', '\u{0576}'), ('\u{0547}', '\u{0577}'), ('\u{0548}', '\u{0578}'), ('\u{0549}', '\u{0579}'),
    ('\u{054A}', '\u{057A}'), ('\u{054B}', '\u{057B}'), ('\u{054C}', '\u{057C}'), ('\u{054D}', '\u{057D}'), ('\u{054E}', '\u{057E}'),
    ('\u{054F}', '\u{057F}'), ('\u{0550}', '\u{0580}'), ('\u{0551}', '\u{0581}'), ('\u{0552}', '\u{0582}'), ('\u{0553}', '\u{0583}'),
    ('\u{0554}', '\u{0584}'), ('\u{0555}', '\u{0585}'), ('\u{0556}', '\u{0586}'), ('\u{10A0}', '\u{2D00}'), ('\u{10A1}', '\u{2D01}'),
    ('\u{10A2}', '\u{2D02}'), ('\u{10A3}', '\u{2D03}'), ('\u{10A4}', '\u{2D04}'), ('\u{10A5}', '\u{2D05}'), ('\u{10A6}', '\u{2D06}'),
    ('\u{10A7}', '\u{2D07}'), ('\u{10A8}', '\u{2D08}'), ('\u{10A9}', '\u{2D09}'), ('\u{10AA}', '\u{2D0A}'), ('\u{10AB}', '\u{2D0B}'),
    ('\u{10AC}', '\u{2D0C}'), ('\u{10AD}', '\u{2D0D}'), ('\u{10AE}', '\u{2D0E}'), ('\u{10AF}', '\u{2D0F}'), ('\u{10B0}', '\u{2D10}'),
    ('\u{10B1}', '\u{2D11}'), ('\u{10B2}', '\u{2D12}'), ('\u{10B3}', '\u{2D13}'), ('\u{10B4}', '\u{2D14}'), ('\u{10B5}', '\u{2D15}'),
    ('\u{10B6}', '\u{2D16}'), ('\u{10B7}', '\u{2D17}'), ('\u{10B8}', '\u{2D18}'), ('\u{10B9}', '\u{2D19}'), ('\u{10BA}', '\u{2D1A}'),
    ('\u{10BB}', '\u{2D1B}'), ('\u{10BC}', '\u{2D1C}'), ('\u{10BD}', '\u{2D1D}'), ('\u{10BE}', '\u{2D1E}'), ('\u{10BF}', '\u{2D1F}'),
    ('\u{10C0}', '\u{2D20}'), ('\u{10C1}', '\u{2D21}'), ('\u{10C2}', '\u{2D22}'), ('\u{10C3}', '\u{2D23}'), ('\u{10C4}', '\u{2D24}'),
    ('\u{10C5}', '\u{2D25}'), ('\u{10C7}', '\u{2D27}'), ('\u{10CD}', '\u{2D2D}'), ('\u{13F8}', '\u{13F0}'), ('\u{13F9}', '\u{13F1}'),
    ('\u{13FA}', '\u{13F2}'), ('\u{13FB}', '\u{13F3}'), ('\u{13FC}', '\u{13F4}'), ('\u{13FD}', '\u{13F5}'), ('\u{1C80}', '\u{0432}'),
    ('\u{1C81}', '\u{0434}'), ('\u{1C82}', '\u{043E}'), ('\u{1C83}', '\u{0441}'), ('\u{1C84}', '\u{0442}'), ('\u{1C85}', '\u{0442}'),
    ('\u{1C86}', '\u{044A}'), ('\u{1C87}', '\u{0463}'), ('\u{1C88}', '\u{A64B}'), ('\u{1C90}', '\u{10D0}'), ('\u{1C91}', '\u{10D1}'),
    ('\u{1C92}', '\u{10D2}'), ('\u{1C93}', '\u{10D3}'), ('\u{1C94}', '\u{10D4}'), ('\u{1C95}', '\u{10D5}'), ('\u{1C96}', '\u{10D6}'),
    ('\u{1C97}', '\u{10D7}'), ('\u{1C98}', '\u{10D8}'), ('\u{1C99}', '\u{10D9}'), ('\u{1C9A}', '\u{10DA}'), ('\u{1C9B}', '\u{10DB}'),
    ('\u{1C9C}', '\u{10DC}'), ('\u{1C9D}', '\u{10DD}'), ('\u{1C9E}', '\u{10DE}'), ('\u{1C9F}', '\u{10DF}'), ('\u{1CA0}', '\u{10E0}'),
    ('\u{1CA1}', '\u{10E1}'), ('\u{1CA2}', '\u{10E2}'), ('\u{1CA3}', '\u{10E3}'), ('\u{1CA4}', '\u{10E4}'), ('\u{1CA5}', '\u{10E5}'),
    ('\u{1CA6}', '\u{10E6}'), ('\u{1CA7}', '\u{10E7}'), ('\u{1CA8}', '\u{10E8}'), ('\u{1CA9}', '\u{10E9}'), ('\u{1CAA}', '\u{10EA}'),
    ('\u{1CAB}', '\u{10EB}'), ('\u{1CAC}', '\u{10EC}'), ('\u{1CAD}', '\u{10ED}'), ('\u{1CAE}', '\u{10EE}'), ('\u{1CAF}', '\u{10EF}'),
    ('\u{1CB0}', '\u{10F0}'), ('\u{1CB1}', '\u{10F1}'), ('\u{1CB2}', '\u{10F2}'), ('\u{1CB3}', '\u{10F3}'), ('\u{1CB4}', '\u{10F4}'),
    ('\u{1CB5}', '\u{10F5}'), ('\u{1CB6}', '\u{10F6}'), ('\u{1CB7}', '\u{10F7}'), ('\u{1CB8}', '\u{10F8}'), ('\u{1CB9}', '\u{10F9}'),
    ('\u{1CBA}', '\u{10FA}'), ('\u{1CBD}', '\u{10FD}'), ('\u{1CBE}', '\u{10FE}'), ('\u{1CBF}', '\u{10FF}'), ('\u{1E00}', '\u{1E01}'),
    ('\u{1E02}', '\u{1E03}'), ('\u{1E04}', '\u{1E05}'), ('\u{1E06}', '\u{1E07}'), ('\u{1E08}', '\u{1E09}'), ('\u{1E0A}', '\u{1E0B}'),
    ('\u{1E0C}', '\u{1E0D}'), ('\u{1E0E}', '\u{1E0F}'), ('\u{1E10}', '\u{1E11}'), ('\u{1E12}', '\u{1E13}'), ('\u{1E14}', '\u{1E15}'),
    ('\u{1E16}', '\u{1E17}'), ('\u{1E18}', '\u{1E19}'), ('\u{1E1A}', '\u{1E1B}'), ('\u{1E1C}', '\u{1E1D}'), ('\u{1E1E}', '\u{1E1F}'),
    ('\u{1E20}', '\u{1E21}'), ('\u{1E22}', '\u{1E23}'), ('\u{1E24}', '\u{1E25}'), ('\u{1E26}', '\u{1E27}'), ('\u{1E28}', '\u{1E29}'),
    ('\u{1E2A}', '\u{1E2B}'), ('\u{1E2C}', '\u{1E2D}'), ('\u{1E2E}', '\u{1E2F}'), ('\u{1E30}', '\u{1E31}'), ('\u{1E32}', '\u{1E33}'),
    ('\u{1E34}', '\u{1E35}'), ('\u{1E36}', '\u{1E37}'), ('\u{1E38}', '\u{1E39}'), ('\u{1E3A}', '\u{1E3B}'), ('\u{1E3C}', '\u{1E3D}'),
    ('\u{1E3E}', '\u{1E3F}'), ('\u{1E40}', '\u{1E41}'), ('\u{1E42}', '\u{1E43}'), ('\u{1E44}', '\u{1E45}'), ('\u{1E46}', '\u{1E47}'),
    ('\u{1E48}', '\u{1E49}'), ('\u{1E4A}', '\u{1E4B}'), ('\u{1E4C}', '\u{1E4D}'), ('\u{1E4E}', '\u{1E4F}'), ('\u{1E50}', '\u{1E51}'),
    ('\u{1E52}', '\u{1E53}'), ('\u{1E54}', '\u{1E55}'), ('\u{1E56}', '\u{1E57}'), ('\u{1E58}', '\u{1E59}'), ('\u{1E5A}', '\u{1E5B}'),
    ('\u{1E5C}', '\u{1E5D}'), ('\u{1E5E}', '\u{1E5F}'), ('\u{1E60}', '\u{1E61}'), ('\u{1E62}', '\u{1E63}'), ('\u{1E64}', '\u{1E65}'),
    ('\u{1E66}', '\u{1E67}'), ('\u{1E68}', '\u{1E69}'), ('\u{1E6A}', '\u{1E6B}'), ('\u{1E6C}', '\u{1E6D}'), ('\u{1E6E}', '\u{1E6F}'),
    ('\u{1E70}', '\u{1E71}'), ('\u{1E72}', '\u{1E73}'), ('\u{1E74}', '\u{1E75}'), ('\u{1E76}', '\u{1E77}'), ('\u{1E78}', '\u{1E79}'),
    ('\u{1E7A}', '\u{1E7B}'), ('\u{1E7C}', '\u{1E7D}'), ('\u{1E7E}', '\u{1E7F}'), ('\u{1E80}', '\u{1E81}'), ('\u{1E82}', '\u{1E83}'),
    ('\u{1E84}', '\u{1E85}'), ('\u{1E86}', '\u{1E87}'), ('\u{1E88}', '\u{1E89}'), ('\u{1E8A}', '\u{1E8B}'), ('\u{1E8C}', '\u{1E8D}'),
    ('\u{1E8E}', '\u{1E8F}'), ('\u{1E90}', '\u{1E91}'), ('\u{1E92}', '\u{1E93}'), ('\u{1E94}', '\u{1E95}'), ('\u{1E9B}', '\u{1E61}'),
    ('\u{1EA0}', '\u{1EA1}'), ('\u{1EA2}', '\u{1EA3}'), ('\u{1EA4}', '\u{1EA5}'), ('\u{1EA6}', '\u{1EA7}'), ('\u{1EA8}', '\u{1EA9}'),
    ('\u{1EAA}', '\u{1EAB}'), ('\u{1EAC}', '\u{1EAD}'), ('\u{1EAE}', '\u{1EAF}'), ('\u{1EB0}', '\u{1EB1}'), ('\u{1EB2}', '\u{1EB3}'),
    ('\u{1EB4}', '\u{1EB5}'), ('\u{1EB6}', '\u{1EB7}'), ('\u{1EB8}', '\u{1EB9}'), ('\u{1EBA}', '\u{1EBB}'), ('\u{1EBC}', '\u{1EBD}'),
    ('\u{1EBE}', '\u{1EBF}'), ('\u{1EC0}', '\u{1EC1}'), ('\u{1EC2}', '\u{1EC3}'), ('\u{1EC4}', '\u{1EC5}'), ('\u{1EC6}', '\u{1EC7}'),
    ('\u{1EC8}', '\u{1EC9}'), ('\u{1ECA}', '\u{1ECB}'), ('\u{1ECC}', '\u{1ECD}'), ('\u{1ECE}', '\u{1ECF}'), ('\u{1ED0}', '\u{1ED1}'),
    ('\u{1ED2}', '\u{1ED3}'), ('\u{1ED4}', '\u{1ED5}'), ('\u{1ED6}', '\u{1ED7}'), ('\u{1ED8}', '\u{1ED9}'), ('\u{1EDA}', '\u{1EDB}'),
    ('\u{1EDC}', '\u{1EDD}'), ('\u{1EDE}', '\u{1EDF}'), ('\u{1EE0}', '\u{1EE1}'), ('\u{1EE2}', '\u{1EE3}'), ('\u{1EE4}', '\u{1EE5}'),
    ('\u{1EE6}', '\u{1EE7}'), ('\u{1EE8}', '\u{1EE9}'), ('\u{1EEA}', '\u{1EEB}'), ('\u{1EEC}', '\u{1EED}'), ('\u{1EEE}', '\u{1EEF}'),
    ('\u{1EF0}', '\u{1EF1}'), ('\u{1EF2}', '\u{1EF3}'), ('\u{1EF4}', '\u{1EF5}'), ('\u{1EF6}', '\u{1EF7}'), ('\u{1EF8}', '\u{1EF9}'),
    ('\u{1EFA}', '\u{1EFB}'), ('\u{1EFC}', '\u{1EFD}'), ('\u{1EFE}', '\u{1EFF}'), ('\u{1F08}', '\u{1F00}'), ('\u{1F09}', '\u{1F01}'),
    ('\u{1F0A}', '\u{1F02}'), ('\u{1F0B}', '\u{1F03}'), ('\u{1F0C}', '\u{1F04}'), ('\u{1F0D}', '\u{1F05}'), ('\u{1F0E}', '\u{1F06}'),
    ('\u{1F0F}', '\u{1F07}'), ('\u{1F18}', '\u{1F10}'), ('\u{1F19}', '\u{1F11}'), ('\u{1F1A}', '\u{1F12}'), ('\u{1F1B}', '\u{1F13}'),
    ('\u{1F1C}', '\u{1F14}'), ('\u{1F1D}', '\u{1F15}'), ('\u{1F28}', '\u{1F20}'), ('\u{1F29}', '\u{1F21}'), ('\u{1F2A}', '\u{1F22}'),
    ('\u{1F2B}', '\u{1F23}'), ('\u{1F2C}', '\u{1F24}'), ('\u{1F2D}', '\u{1F25}'), ('\u{1F2E}', '\u{1F26}'), ('\u{1F2F}', '\u{1F27}'),
    ('\u{1F38}', '\u{1F30}'), ('\u{1F39}', '\u{1F31}'), ('\u{1F3A}', '\u{1F32}'), ('\u{1F3B}', '\u{1F33}'), ('\u{1F3C}', '\u{1F34}'),
    ('\u{1F3D}', '\u{1F35}'), ('\u{1F3E}', '\u{1F36}'), ('\u{1F3F}', '\u{1F37}'), ('\u{1F48}', '\u{1F40}'), ('\u{1F49}', '\u{1F41}'),
    ('\u{1F4A}', '\u{1F42}'), ('\u{1F4B}', '\u{1F43}'), ('\u{1F4C}', '\u{1F44}'), ('\u{1F4D}', '\u{1F45}'), ('\u{1F59}', '\u{1F51}'),
    ('\u{1F5B}', '\u{1F53}'), ('\u{1F5D}', '\u{1F55}'), ('\u{1F5F}', '\u{1F57}'), ('\u{1F68}', '\u{1F60}'), ('\u{1F69}', '\u{1F61}'),
    ('\u{1F6A}', '\u{1F62}'), ('\u{1F6B}', '\u{1F63}'), ('\u{1F6C}', '\u{1F64}'), ('\u{1F6D}', '\u{1F65}'), ('\u{1F6E}', '\u{1F66}'),
    ('\u{1F6F}', '\u{1F67}'), ('\u{1FB8}', '\u{1FB0}'), ('\u{1FB9}', '\u{1FB1}'), ('\u{1FBA}', '\u{1F70}'), ('\u{1FBB}', '\u{1F71}'),
    ('\u{1FBE}', '\u{03B9}'), ('\u{1FC8}', '\u{1F72}'), ('\u{1FC9}', '\u{1F73}'), ('\u{1FCA}', '\u{1F74}'), ('\u{1FCB}', '\u{1F75}'),
    ('\u{1FD8}', '\u{1FD0}'), ('\u{1FD9}', '\u{1FD1}'), ('\u{1FDA}', '\u{1F76}'), ('\u{1FDB}', '\u{1F77}'), ('\u{1FE8}', '\u{1FE0}'),
    ('\u{1FE9}', '\u{1FE1}'), ('\u{1FEA}', '\u{1F7A}'), ('\u{1FEB}', '\u{1F7B}'), ('\u{1FEC}', '\u{1FE5}'), ('\u{1FF8}', '\u{1F78}'),
    ('\u{1FF9}', '\u{1F79}'), ('\u{1FFA}', '\u{1F7C}'), ('\u{1FFB}', '\u{1F7D}'), ('\u{2126}', '\u{03C9}'), ('\u{212A}', '\u{006B}'),
    ('\u{212B}', '\u{00E5}'), ('\u{2132}', '\u{214E}'), ('\u{2160}', '\u{2170}'), ('\u{2161}', '\u{2171}'), ('\u{2162}', '\u{2172}'),
    ('\u{2163}', '\u{2173}'), ('\u{2164}', '\u{2174}'), ('\u{2165}', '\u{2175}'), ('\u{2166}', '\u{2176}'), ('\u{2167}', '\u{2177}'),
    ('\u{2168}', '\u{2178}'), ('\u{2169}', '\u{2179}'), ('\u{216A}', '\u{217A}'), ('\u{216B}', '\u{217B}'), ('\u{216C}', '\u{217C}'),
    ('\u{216D}', '\u{217D}'), ('\u{216E}', '\u{217E}'), ('\u{216F}', '\u{217F}'), ('\u{2183}', '\u{2184}'), ('\u{24B6}', '\u{24D0}'),
    ('\u{24B7}', '\u{24D1}'), ('\u{24B8}', '\u{24D2}'), ('\u{24B9}', '\u{24D3}'), ('\u{24BA}', '\u{24D4}'), ('\u{24BB}', '\u{24D5}'),
    ('\u{24BC}', '\u{24D6}'), ('\u{24BD}', '\u{24D7}'), ('\u{24BE}', '\u{24D8}'), ('\u{24BF}', '\u{24D9}'), ('\u{24C0}', '\u{24DA}'),
    ('\u{24C1}', '\u{24DB}'), ('\u{24C2}', '\u{24DC}'), ('\u{24C3}', '\u{24DD}'), ('\u{24C4}', '\u{24DE}'), ('\u{24C5}', '\u{24DF}'),
    ('\u{24C6}', '\u{24E0}'), ('\u{24C7}', '\u{24E1}'), ('\u{24C8}', '\u{24E2}'), ('\u{24C9}', '\u{24E3}'), ('\u{24CA}', '\u{24E4}'),
    ('\u{24CB}', '\u{24E5}'), ('\u{24CC}', '\u{24E6}'), ('\u{24CD}', '\u{24E7}'), ('\u{24CE}', '\u{24E8}'), ('\u{24CF}', '\u{24E9}'),
    ('\u{2C00}', '\u{2C30}'), ('\u{2C01}', '\u{2C31}'), ('\u{2C02}', '\u{2C32}'), ('\u{2C03}', '\u{2C33}'), ('\u{2C04}', '\u{2C34}'),
    ('\u{2C05}', '\u{2C35}'), ('\u{2C06}', '\u{2C36}'), ('\u{2C07}', '\u{2C37}'), ('\u{2C08}', '\u{2C38}'), ('\u{2C09}', '\u{2C39}'),
    ('\u{2C0A}', '\u{2C3A}'), ('\u{2C0B}', '\u{2C3B}'), ('\u{2C0C}', '\u{2C3C}'), ('\u{2C0D}', '\u{2C3D}'), ('\u{2C0E}', '\u{2C3E}'),
    ('\u{2C0F}', '\u{2C3F}'), ('\u{2C10}', '\u{2C40}'), ('\u{2C11}', '\u{2C41}'), ('\u{2C12}', '\u{2C42}'), ('\u{2C13}', '\u{2C43}'),
    ('\u{2C14}', '\u{2C44}'), ('\u{2C15}', '\u{2C45}'), ('\u{2C16}', '\u{2C46}'), ('\u{2C17}', '\u{2C47}'), ('\u{2C18}', '\u{2C48}'),
    ('\u{2C19}', '\u{2C49}'), ('\u{2C1A}', '\u{2C4A}'), ('\u{2C1B}', '\u{2C4B}'), ('\u{2C1C}', '\u{2C4C}'), ('\u{2C1D}', '\u{2C4D}'),
    ('\u{2C1E}', '\u{2C4E}'), ('\u{2C1F}', '\u{2C4F}'), ('\u{2C20}', '\u{2C50}'), ('\u{2C21}', '\u{2C51}'), ('\u{2C22}', '\u{2C52}'),
    ('\u{2C23}', '\u{2C53}'), ('\u{2C24}', '\u{2C54}'), ('\u{2C25}', '\u{2C55}'), ('\u{2C26}', '\u{2C56}'), ('\u{2C27}', '\u{2C57}'),
    ('\u{2C28}', '\u{2C58}'), ('\u{2C29}', '\u{2C59}'), ('\u{2C2A}', '\u{2C5A}'), ('\u{2C2B}', '\u{2C5B}'), ('\u{2C2C}', '\u{2C5C}'),
    ('\u{2C2D}', '\u{2C5D}'), ('\u{2C2E}', '\u{2C5E}'), ('\u{2C2F}', '\u{2C5F}'), ('\u{2C60}', '\u{2C61}'), ('\u{2C62}', '\u{026B}'),
    ('\u{2C63}', '\u{1D7D}'), ('\u{2C64}', '\u{027D}'), ('\u{2C67}', '\u{2C68}'), ('\u{2C69}', '\u{2C6A}'), ('\u{2C6B}', '\u{2C6C}'),
    ('\u{2C6D}', '\u{0251}'), ('\u{2C6E}', '\u{0271}'), ('\u{2C6F}', '\u{0250}'), ('\u{2C70}', '\u{0252}'), ('\u{2C72}', '\u{2C73}'),
    ('\u{2C75}', '\u{2C76}'), ('\u{2C7E}', '\u{023F}'), ('\u{2C7F}', '\u{0240}'), ('\u{2C80}', '\u{2C81}'), ('\u{2C82}', '\u{2C83}'),
    ('\u{2C84}', '\u{2C85}'), ('\u{2C86}', '\u{2C87}'), ('\u{2C88}', '\u{2C89}'), ('\u{2C8A}', '\u{2C8B}'), ('\u{2C8C}', '\u{2C8D}'),
    ('\u{2C8E}', '\u{2C8F}'), ('\u{2C90}', '\u{2C91}'), ('\u{2C92}', '\u{2C93}'), ('\u{2C94}', '\u{2C95}'), ('\u{2C96}', '\u{2C97}'),
    ('\u{2C98}', '\u{2C99}'), ('\u{2C9A}', '\u{2C9B}'), ('\u{2C9C}', '\u{2C9D}'), ('\u{2C9E}', '\u{2C9F}'), ('\u{2CA0}', '\u{2CA1}'),
    ('\u{2CA2}', '\u{2CA3}'), ('\u{2CA4}', '\u{2CA5}'), ('\u{2CA6}', '\u{2CA7}'), ('\u{2CA8}', '\u{2CA9}'), ('\u{2CAA}', '\u{2CAB}'),
    ('\u{2CAC}', '\u{2CAD}'), ('\u{2CAE}', '\u{2CAF}'), ('\u{2CB0}', '\u{2CB1}'), ('\u{2CB2}', '\u{2CB3}'), ('\u{2CB4}', '\u{2CB5}'),
    ('\u{2CB6}', '\u{2CB7}'), ('\u{2CB8}', '\u{2CB9}'), ('\u{2CBA}', '\u{2CBB}'), ('\u{2CBC}', '\u{2CBD}'), ('\u{2CBE}', '\u{2CBF}'),
    ('\u{2CC0}', '\u{2CC1}'), ('\u{2CC2}', '\u{2CC3}'), ('\u{2CC4}', '\u{2CC5}'), ('\u{2CC6}', '\u{2CC7}'), ('\u{2CC8}', '\u{2CC9}'),
    ('\u{2CCA}', '\u{2CCB}'), ('\u{2CCC}', '\u{2CCD}'), ('\u{2CCE}', '\u{2CCF}'), ('\u{2CD0}', '\u{2CD1}'), ('\u{2CD2}', '\u{2CD3}'),
    ('\u{2CD4}', '\u{2CD5}'), ('\u{2CD6}', '\u{2CD7}'), ('\u{2CD8}', '\u{2CD9}'), ('\u{2CDA}', '\u{2CDB}'), ('\u{2CDC}', '\u{2CDD}'),
    ('\u{2CDE}', '\u{2CDF}'), ('\u{2CE0}', '\u{2CE1}'), ('\u{2CE2}', '\u{2CE3}'), ('\u{2CEB}', '\u{2CEC}'), ('\u{2CED}', '\u{2CEE}'),
    ('\u{2CF2}', '\u{2CF3}'), ('\u{A640}', '\u{A641}'), ('\u{A642}', '\u{A643}'), ('\u{A644}', '\u{A645}'), ('\u{A646}', '\u{A647}'),
    ('\u{A648}', '\u{A649}'), ('\u{A64A}', '\u{A64B}'), ('\u{A64C}', '\u{A64D}'), ('\u{A64E}', '\u{A64F}'), ('\u{A650}', '\u{A651}'),
    ('\u{A652}', '\u{A653}'), ('\u{A654}', '\u{A655}'), ('\u{A656}', '\u{A657}'), ('\u{A658}', '\u{A659}'), ('\u{A65A}', '\u{A65B}'),
    ('\u{A65C}', '\u{A65D}'), ('\u{A65E}', '\u{A65F}'), ('\u{A660}', '\u{A661}'), ('\u{A662}', '\u{A663}'), ('\u{A664}', '\u{A665}'),
    ('\u{A666}', '\u{A667}'), ('\u{A668}', '\u{A669}'), ('\u{A66A}', '\u{A66B}'), ('\u{A66C}', '\u{A66D}'), ('\u{A680}', '\u{A681}'),
    ('\u{A682}', '\u{A683}'), ('\u{A684}', '\u{A685}'), ('\u{A686}', '\u{A687}'), ('\u{A688}', '\u{A689}'), ('\u{A68A}', '\u{A68B}'),
    ('\u{A68C}', '\u{A68D}'), ('\u{A68E}', '\u{A68F}'), ('\u{A690}', '\u{A691}'), ('\u{A692}', '\u{A693}'), ('\u{A694}', '\u{A695}'),
    ('\u{A696}', '\u{A697}'), ('\u{A698}', '\u{A699}'), ('\u{A69A}', '\u{A69B}'), ('\u{A722}', '\u{A723}'), ('\u{A724}', '\u{A725}'),
    ('\u{A726}', '\u{A727}'), ('\u{A728}', '\u{A729}'), ('\u{A72A}', '\u{A72B}'), ('\u{A72C}', '\u{A72D}'), ('\u{A72E}', '\u{A72F}'),
    ('\u{A732}', '\u{A733}'), ('\u{A734}', '\u{A735}'), ('\u{A736}', '\u{A737}'), ('\u{A738}', '\u{A739}'), ('\u{A73A}', '\u{A73B}'),
    ('\u{A73C}', '\u{A73D}'), ('\u{A73E}', '\u{A73F}'), ('\u{A740}', '\u{A741}'), ('\u{A742}', '\u{A743}'), ('\u{A744}', '\u{A745}'),
    ('\u{A746}', '\u{A747}'), ('\u{A748}', '\u{A749}'), ('\u{A74A}', '\u{A74B}'), ('\u{A74C}', '\u{A74D}'), ('\u{A74E}', '\u{A74F}'),
    ('\u{A750}', '\u{A751}'), ('\u{A752}', '\u{A753}'), ('\u{A754}', '\u{A755}'), ('\u{A756}', '\u{A757}'), ('\u{A758}', '\u{A759}'),
    ('\u{A75A}', '\u{A75B}'), ('\u{A75C}', '\u{A75D}'), ('\u{A75E}', '\u{A75F}'), ('\u{A760}', '\u{A761}'), ('\u{A762}', '\u{A763}'),
    ('\u{A764}', '\u{A765}'), ('\u{A766}', '\u{A767}'), ('\u{A768}', '\u{A769}'), ('\u{A76A}', '\u{A76B}'), ('\u{A76C}', '\u{A76D}'),
    ('\u{A76E}', '\u{A76F}'), ('\u{A779}', '\u{A77A}'), ('\u{A77B}', '\u{A77C}'), ('\u{A77D}', '\u{1D79}'), ('\u{A77E}', '\u{A77F}'),
    ('\u{A780}', '\u{A781}'), ('\u{A782}', '\u{A783}'), ('\u{A784}', '\u{A785}'), ('\u{A786}', '\u{A787}'), ('\u{A78B}', '\u{A78C}'),
    ('\u{A78D}', '\u{0265}'), ('\u{A790}', '\u{A791}'), ('\u{A792}', '\u{A793}'), ('\u{A796}', '\u{A797}'), ('\u{A798}', '\u{A799}'),
    ('\u{A79A}', '\u{A79B}'), ('\u{A79C}', '\u{A79D}'), ('\u{A79E}', '\u{A79F}'), ('\u{A7A0}', '\u{A7A1}'), ('\u{A7A2}', '\u{A7A3}'),
    ('\u{A7A4}', '\u{A7A5}'), ('\u{A7A6}', '\u{A7A7}'), ('\u{A7A8}', '\u{A7A9}'), ('\u{A7AA}', '\u{0266}'), ('\u{A7AB}', '\u{025C}'),
    ('\u{A7AC}', '\u{0261}'), ('\u{A7AD}', '\u{026C}'), ('\u{A7AE}', '\u{026A}'), ('\u{A7B0}', '\u{029E}'), ('\u{A7B1}', '\u{0287}'),
    ('\u{A7B2}', '\u{029D}'), ('\u{A7B3}', '\u{AB53}'), ('\u{A7B4}', '\u{A7B5}'), ('\u{A7B6}', '\u{A7B7}'), ('\u{A7B8}', '\u{A7B9}'),
    ('\u{A7BA}', '\u{A7BB}'), ('\u{A7BC}', '\u{A7BD}'), ('\u{A7BE}', '\u{A7BF}'), ('\u{A7C0}', '\u{A7C1}'), ('\u{A7C2}', '\u{A7C3}'),
    ('\u{A7C4}', '\u{A794}'), ('\u{A7C5}', '\u{0282}'), ('\u{A7C6}', '\u{1D8E}'), ('\u{A7C7}', '\u{A7C8}'), ('\u{A7C9}', '\u{A7CA}'),
    ('\u{A7D0}', '\u{A7D1}'), ('\u{A7D6}', '\u{A7D7}'), ('\u{A7D8}', '\u{A7D9}'), ('\u{A7F5}', '\u{A7F6}'), ('\u{AB70}', '\u{13A0}'),
    ('\u{AB71}', '\u{13A1}'), ('\u{AB72}', '\u{13A2}'), ('\u{AB73}', '\u{13A3}'), ('\u{AB74}', '\u{13A4}'), ('\u{AB75}', '\u{13A5}'),
    ('\u{AB76}', '\u{13A6}'), ('\u{AB77}', '\u{13A7}'), ('\u{AB78}', '\u{13A8}'), ('\u{AB79}', '\u{13A9}'), ('\u{AB7A}', '\u{13AA}'),
    ('\u{AB7B}', '\u{13AB}'), ('\u{AB7C}', '\u{13AC}'), ('\u{AB7D}', '\u{13AD}'), ('\u{AB7E}', '\u{13AE}'), ('\u{AB7F}', '\u{13AF}'),
    ('\u{AB80}', '\u{13B0}'), ('\u{AB81}', '\u{13B1}'), ('\u{AB82}', '\u{13B2}'), ('\u{AB83}', '\u{13B3}'), ('\u{AB84}', '\u{13B4}'),
    ('\u{AB85}', '\u{13B5}'), ('\u{AB86}', '\u{13B6}'), ('\u{AB87}', '\u{13B7}'), ('\u{AB88}', '\u{13B8}'), ('\u{AB89}', '\u{13B9}'),
    ('\u{AB8A}', '\u{13BA}'), ('\u{AB8B}', '\u{13BB}'), ('\u{AB8C}', '\u{13BC}'), ('\u{AB8D}', '\u{13BD}'), ('\u{AB8E}', '\u{13BE}'),
    ('\u{AB8F}', '\u{13BF}'), ('\u{AB90}', '\u{13C0}'), ('\u{AB91}', '\u{13C1}'), ('\u{AB92}', '\u{13C2}'), ('\u{AB93}', '\u{13C3}'),
    ('\u{AB94}', '\u{13C4}'), ('\u{AB95}', '\u{13C5}'), ('\u{AB96}', '\u{13C6}'), ('\u{AB97}', '\u{13C7}'), ('\u{AB98}', '\u{13C8}'),
    ('\u{AB99}', '\u{13C9}'), ('\u{AB9A}', '\u{13CA}'), ('\u{AB9B}', '\u{13CB}'), ('\u{AB9C}', '\u{13CC}'), ('\u{AB9D}', '\u{13CD}'),
    ('\u{AB9E}', '\u{13CE}'), ('\u{AB9F}', '\u{13CF}'), ('\u{ABA0}', '\u{13D0}'), ('\u{ABA1}', '\u{13D1}'), ('\u{ABA2}', '\u{13D2}'),
    ('\u{ABA3}', '\u{13D3}'), ('\u{ABA4}', '\u{13D4}'), ('\u{ABA5}', '\u{13D5}'), ('\u{ABA6}', '\u{13D6}'), ('\u{ABA7}', '\u{13D7}'),
    ('\u{ABA8}', '\u{13D8}'), ('\u{ABA9}', '\u{13D9}'), ('\u{ABAA}', '\u{13DA}'), ('\u{ABAB}', '\u{13DB}'), ('\u{ABAC}', '\u{13DC}'),
    ('\u{ABAD}', '\u{13DD}'), ('\u{ABAE}', '\u{13DE}'), ('\u{ABAF}', '\u{13DF}'), ('\u{ABB0}', '\u{13E0}'), ('\u{ABB1}', '\u{13E1}'),
    ('\u{ABB2}', '\u{13E2}'), ('\u{ABB3}', '\u{13E3}'), ('\u{ABB4}', '\u{13E4}'), ('\u{ABB5}', '\u{13E5}'), ('\u{ABB6}', '\u{13E6}'),
    ('\u{ABB7}', '\u{13E7}'), ('\u{ABB8}', '\u{13E8}'), ('\u{ABB9}', '\u{13E9}'), ('\u{ABBA}', '\u{13EA}'), ('\u{ABBB}', '\u{13EB}'),
    ('\u{ABBC}', '\u{13EC}'), ('\u{ABBD}', '\u{13ED}'), ('\u{ABBE}', '\u{13EE}'), ('\u{ABBF}', '\u{13EF}'), ('\u{FF21}', '\u{FF41}'),
    ('\u{FF22}', '\u{FF42}'), ('\u{FF23}', '\u{FF43}'), ('\u{FF24}', '\u{FF44}'), ('\u{FF25}', '\u{FF45}'), ('\u{FF26}', '\u{FF46}'),
    ('\u{FF27}', '\u{FF47}'), ('\u{FF28}', '\u{FF48}'), ('\u{FF29}', '\u{FF49}'), ('\u{FF2A}', '\u{FF4A}'), ('\u{FF2B}', '\u{FF4B}'),
    ('\u{FF2C}', '\u{FF4C}'), ('\u{FF2D}', '\u{FF4D}'), ('\u{FF2E}', '\u{FF4E}'), ('\u{FF2F}', '\u{FF4F}'), ('\u{FF30}', '\u{FF50}'),
    ('\u{FF31}', '\u{FF51}'), ('\u{FF32}', '\u{FF52}'), ('\u{FF33}', '\u{FF53}'), ('\u{FF34}', '\u{FF54}'), ('\u{FF35}', '\u{FF55}'),
    ('\u{FF36}', '\u{FF56}'), ('\u{FF37}', '\u{FF57}'), ('\u{FF38}', '\u{FF58}'), ('\u{FF39}', '\u{FF59}'), ('\u{FF3A}', '\u{FF5A}'),
    ('\u{10400}', '\u{10428}'), ('\u{10401}', '\u{10429}'), ('\u{10402}', '\u{1042A}'), ('\u{10403}', '\u{1042B}'), ('\u{10404}', '\u{1042C}'),
    ('\u{10405}', '\u{1042D}'), ('\u{10406}', '\u{1042E}'), ('\u{10407}', '\u{1042F}'), ('\u{10408}', '\u{10430}'), ('\u{10409}', '\u{10431}'),
    ('\u{1040A}', '\u{10432}'), ('\u{1040B}', '\u{10433}'), ('\u{1040C}', '\u{10434}'), ('\u{1040D}', '\u{10435}'), ('\u{1040E}', '\u{10436}'),
    ('\u{1040F}', '\u{10437}'), ('\u{10410}', '\u{10438}'), ('\u{10411}', '\u{10439}'), ('\u{10412}', '\u{1043A}'), ('\u{10413}', '\u{1043B}'),
    ('\u{10414}', '\u{1043C}'), ('\u{10415}', '\u{1043D}'), ('\u{10416}', '\u{1043E}'), ('\u{10417}', '\u{1043F}'), ('\u{10418}', '\u{10440}'),
    ('\u{10419}', '\u{10441}'), ('\u{1041A}', '\u{10442}'), ('\u{1041B}', '\u{10443}'), ('\u{1041C}', '\u{10444}'), ('\u{1041D}', '\u{10445}'),
    ('\u{1041E}', '\u{10446}'), ('\u{1041F}', '\u{10447}'), ('\u{10420}', '\u{10448}'), ('\u{10421}', '\u{10449}'), ('\u{10422}', '\u{1044A}'),
    ('\u{10423}', '\u{1044B}'), ('\u{10424}', '\u{1044C}'), ('\u{10425}', '\u{1044D}'), ('\u{10426}', '\u{1044E}'), ('\u{10427}', '\u{1044F}'),
    ('\u{104B0}', '\u{104D8}'), ('\u{104B1}', '\u{104D9}'), ('\u{104B2}', '\u{104DA}'), ('\u{104B3}', '\u{104DB}'), ('\u{104B4}', '\u{104DC}'),
    ('\u{104B5}', '\u{104DD}'), ('\u{104B6}', '\u{104DE}'), ('\u{104B7}', '\u{104DF}'), ('\u{104B8}', '\u{104E0}'), ('\u{104B9}', '\u{104E1}'),
    ('\u{104BA}', '\u{104E2}'), ('\u{104BB}', '\u{104E3}'), ('\u{104BC}', '\u{104E4}'), ('\u{104BD}', '\u{104E5}'), ('\u{104BE}', '\u{104E6}'),
    ('\u{104BF}', '\u{104E7}'), ('\u{104C0}', '\u{104E8}'), ('\u{104C1}', '\u{104E9}'), ('\u{104C2}', '\u{104EA}'), ('\u{104C3}', '\u{104EB}'),
    ('\u{104C4}', '\u{104EC}'), ('\u{104C5}', '\u{104ED}'), ('\u{104C6}', '\u{104EE}'), ('\u{104C7}', '\u{104EF}'), ('\u{104C8}', '\u{104F0}'),
    ('\u{104C9}', '\u{104F1}'), ('\u{104CA}', '\u{104F2}'), ('\u{104CB}', '\u{104F3}'), ('\u{104CC}', '\u{104F4}'), ('\u{104CD}', '\u{104F5}'),
    ('\u{104CE}', '\u{104F6}'), ('\u{104CF}', '\u{104F7}'), ('\u{104D0}', '\u{104F8}'), ('\u{104D1}', '\u{104F9}'), ('\u{104D2}', '\u{104FA}'),
    ('\u{104D3}', '\u{104FB}'), ('\u{10570}', '\u{10597}'), ('\u{10571}', '\u{10598}'), ('\u{10572}', '\u{10599}'), ('\u{10573}', '\u{1059A}'),
    ('\u{10574}', '\u{1059B}'), ('\u{10575}', '\u{1059C}'), ('\u{10576}', '\u{1059D}'), ('\u{10577}', '\u{1059E}'), ('\u{10578}', '\u{1059F}'),
    ('\u{10579}', '\u{105A0}'), ('\u{1057A}', '\u{105A1}'), ('\u{1057C}', '\u{105A3}'), ('\u{1057D}', '\u{105A4}'), ('\u{1057E}', '\u{105A5}'),
    ('\u{1057F}', '\u{105A6}'), ('\u{10580}', '\u{105A7}'), ('\u{10581}', '\u{105A8}'), ('\u{10582}', '\u{105A9}'), ('\u{10583}', '\u{105AA}'),
    ('\u{10584}', '\u{105AB}'), ('\u{10585}', '\u{105AC}'), ('\u{10586}', '\u{105AD}'), ('\u{10587}', '\u{105AE}'), ('\u{10588}', '\u{105AF}'),
    ('\u{10589}', '\u{105B0}'), ('\u{1058A}', '\u{105B1}'), ('\u{1058C}', '\u{105B3}'), ('\u{1058D}', '\u{105B4}'), ('\u{1058E}', '\u{105B5}'),
    ('\u{1058F}', '\u{105B6}'), ('\u{10590}', '\u{105B7}'), ('\u{10591}', '\u{105B8}'), ('\u{10592}', '\u{105B9}'), ('\u{10594}', '\u{105BB}'),
    ('\u{10595}', '\u{105BC}'), ('\u{10C80}', '\u{10CC0}'), ('\u{10C81}', '\u{10CC1}'), ('\u{10C82}', '\u{10CC2}'), ('\u{10C83}', '\u{10CC3}'),
    ('\u{10C84}', '\u{10CC4}'), ('\u{10C85}', '\u{10CC5}'), ('\u{10C86}', '\u{10CC6}'), ('\u{10C87}', '\u{10CC7}'), ('\u{10C88}', '\u{10CC8}'),
    ('\u{10C89}', '\u{10CC9}'), ('\u{10C8A}', '\u{10CCA}'), ('\u{10C8B}', '\u{10CCB}'), ('\u{10C8C}', '\u{10CCC}'), ('\u{10C8D}', '\u{10CCD}'),
    ('\u{10C8E}', '\u{10CCE}'), ('\u{10C8F}', '\u{10CCF}'), ('\u{10C90}', '\u{10CD0}'), ('\u{10C91}', '\u{10CD1}'), ('\u{10C92}', '\u{10CD2}'),
    ('\u{10C93}', '\u{10CD3}'), ('\u{10C94}', '\u{10CD4}'), ('\u{10C95}', '\u{10CD5}'), ('\u{10C96}', '\u{10CD6}'), ('\u{10C97}', '\u{10CD7}'),
    ('\u{10C98}', '\u{10CD8}'), ('\u{10C99}', '\u{10CD9}'), ('\u{10C9A}', '\u{10CDA}'), ('\u{10C9B}', '\u{10CDB}'), ('\u{10C9C}', '\u{10CDC}'),
    ('\u{10C9D}', '\u{10CDD}'), ('\u{10C9E}', '\u{10CDE}'), ('\u{10C9F}', '\u{10CDF}'), ('\u{10CA0}', '\u{10CE0}'), ('\u{10CA1}', '\u{10CE1}'),
    ('\u{10CA2}', '\u{10CE2}'), ('\u{10CA3}', '\u{10CE3}'), ('\u{10CA4}', '\u{10CE4}'), ('\u{10CA5}', '\u{10CE5}'), ('\u{10CA6}', '\u{10CE6}'),
    ('\u{10CA7}', '\u{10CE7}'), ('\u{10CA8}', '\u{10CE8}'), ('\u{10CA9}', '\u{10CE9}'), ('\u{10CAA}', '\u{10CEA}'), ('\u{10CAB}', '\u{10CEB}'),
    ('\u{10CAC}', '\u{10CEC}'), ('\u{10CAD}', '\u{10CED}'), ('\u{10CAE}', '\u{10CEE}'), ('\u{10CAF}', '\u{10CEF}'), ('\u{10CB0}', '\u{10CF0}'),
    ('\u{10CB1}', '\u{10CF1}'), ('\u{10CB2}', '\u{10CF2}'), ('\u{118A0}', '\u{118C0}'), ('\u{118A1}', '\u{118C1}'), ('\u{118A2}', '\u{118C2}'),
    ('\u{118A3}', '\u{118C3}'), ('\u{118A4}', '\u{118C4}'), ('\u{118A5}', '\u{118C5}'), ('\u{118A6}', '\u{118C6}'), ('\u{118A7}', '\u{118C7}'),
    ('\u{118A8}', '\u{118C8}'), ('\u{118A9}', '\u{118C9}'), ('\u{118AA}', '\u{118CA}'), ('\u{118AB}', '\u{118CB}'), ('\u{118AC}', '\u{118CC}'),
    ('\u{118AD}', '\u{118CD}'), ('\u{118AE}', '\u{118CE}'), ('\u{118AF}', '\u{118CF}'), ('\u{118B0}', '\u{118D0}'), ('\u{118B1}', '\u{118D1}'),
    ('\u{118B2}', '\u{118D2}'), ('\u{118B3}', '\u{118D3}'), ('\u{118B4}', '\u{118D4}'), ('\u{118B5}', '\u{118D5}'), ('\u{118B6}', '\u{118D6}'),
    ('\u{118B7}', '\u{118D7}'), ('\u{118B8}', '\u{118D8}'), ('\u{118B9}', '\u{118D9}'), ('\u{118BA}', '\u{118DA}'), ('\u{118BB}', '\u{118DB}'),
    ('\u{118BC}', '\u{118DC}'), ('\u{118BD}', '\u{118DD}'), ('\u{118BE}', '\u{118DE}'), ('\u{118BF}', '\u{118DF}'), ('\u{16E40}', '\u{16E60}'),
    ('\u{16E41}', '\u{16E61}'), ('\u{16E42}', '\u{16E62}'), ('\u{16E43}', '\u{16E63}'), ('\u{16E44}', '\u{16E64}'), ('\u{16E45}', '\u{16E65}'),
    ('\u{16E46}', '\u{16E66}'), ('\u{16E47}', '\u{16E67}'), ('\u{16E48}', '\u{16E68}'), ('\u{16E49}', '\u{16E69}'), ('\u{16E4A}', '\u{16E6A}'),
    ('\u{16E4B}', '\u{16E6B}'), ('\u{16E4C}', '\u{16E6C}'), ('\u{16E4D}', '\u{16E6D}'), ('\u{16E4E}', '\u{16E6E}'), ('\u{16E4F}', '\u{16E6F}'),
    ('\u{16E50}', '\u{16E70}'), ('\u{16E51}', '\u{16E71}'), ('\u{16E52}', '\u{16E72}'), ('\u{16E53}', '\u{16E73}'), ('\u{16E54}', '\u{16E74}'),
    ('\u{16E55}', '\u{16E75}'), ('\u{16E56}', '\u{16E76}'), ('\u{16E57}', '\u{16E77}'), ('\u{16E58}', '\u{16E78}'), ('\u{16E59}', '\u{16E79}'),
    ('\u{16E5A}', '\u{16E7A}'), ('\u{16E5B}', '\u{16E7B}'), ('\u{16E5C}', '\u{16E7C}'), ('\u{16E5D}', '\u{16E7D}'), ('\u{16E5E}', '\u{16E7E}'),
    ('\u{16E5F}', '\u{16E7F}'), ('\u{1E900}', '\u{1E922}'), ('\u{1E901}', '\u{1E923}'), ('\u{1E902}', '\u{1E924}'), ('\u{1E903}', '\u{1E925}'),
    ('\u{1E904}', '\u{1E926}'), ('\u{1E905}', '\u{1E927}'), ('\u{1E906}', '\u{1E928}'), ('\u{1E907}', '\u{1E929}'), ('\u{1E908}', '\u{1E92A}'),
    ('\u{1E909}', '\u{1E92B}'), ('\u{1E90A}', '\u{1E92C}'), ('\u{1E90B}', '\u{1E92D}'), ('\u{1E90C}', '\u{1E92E}'), ('\u{1E90D}', '\u{1E92F}'),
    ('\u{1E90E}', '\u{1E930}'), ('\u{1E90F}', '\u{1E931}'), ('\u{1E910}', '\u{1E932}'), ('\u{1E911}', '\u{1E933}'), ('\u{1E912}', '\u{1E934}'),
    ('\u{1E913}', '\u{1E935}'), ('\u{1E914}', '\u{1E936}'), ('\u{1E915}', '\u{1E937}'), ('\u{1E916}', '\u{1E938}'), ('\u{1E917}', '\u{1E939}'),
    ('\u{1E918}', '\u{1E93A}'), ('\u{1E919}', '\u{1E93B}'), ('\u{1E91A}', '\u{1E93C}'), ('\u{1E91B}', '\u{1E93D}'), ('\u{1E91C}', '\u{1E93E}'),
    ('\u{1E91D}', '\u{1E93F}'), ('\u{1E91E}', '\u{1E940}'), ('\u{1E91F}', '\u{1E941}'), ('\u{1E920}', '\u{1E942}'), ('\u{1E921}', '\u{1E943}'),
];

/// Codepoints whose full case folding expands to several codepoints
pub(crate) static EXPANDED_FOLDS: &[(char, &[char])] = &[
    ('\u{00DF}', &['\u{0073}', '\u{0073}']),
    ('\u{0130}', &['\u{0069}', '\u{0307}']),
    ('\u{0149}', &['\u{02BC}', '\u{006E}']),
    ('\u{01F0}', &['\u{006A}', '\u{030C}']),
    ('\u{0390}', &['\u{03B9}', '\u{0308}', '\u{0301}']),
    ('\u{03B0}', &['\u{03C5}', '\u{0308}', '\u{0301}']),
    ('\u{0587}', &['\u{0565}', '\u{0582}']),
    ('\u{1E96}', &['\u{0068}', '\u{0331}']),
    ('\u{1E97}', &['\u{0074}', '\u{0308}']),
    ('\u{1E98}', &['\u{0077}', '\u{030A}']),
    ('\u{1E99}', &['\u{0079}', '\u{030A}']),
    ('\u{1E9A}', &['\u{0061}', '\u{02BE}']),
    ('\u{1E9E}', &['\u{0073}', '\u{0073}']),
    ('\u{1F50}', &['\u{03C5}', '\u{0313}']),
    ('\u{1F52}', &['\u{03C5}', '\u{0313}', '\u{0300}']),
    ('\u{1F54}', &['\u{03C5}', '\u{0313}', '\u{0301}']),
    ('\u{1F56}', &['\u{03C5}', '\u{0313}', '\u{0342}']),
    ('\u{1F80}', &['\u{1F00}', '\u{03B9}']),
    ('\u{1F81}', &['\u{1F01}', '\u{03B9}']),
    ('\u{1F82}', &['\u{1F02}', '\u{03B9}']),
    ('\u{1F83}', &['\u{1F03}', '\u{03B9}']),
    ('\u{1F84}', &['\u{1F04}', '\u{03B9}']),
    ('\u{1F85}', &['\u{1F05}', '\u{03B9}']),
    ('\u{1F86}', &['\u{1F06}', '\u{03B9}']),
    ('\u{1F87}', &['\u{1F07}', '\u{03B9}']),
    ('\u{1F88}', &['\u{1F00}', '\u{03B9}']),
    ('\u{1F89}', &['\u{1F01}', '\u{03B9}']),
    ('\u{1F8A}', &['\u{1F02}', '\u{03B9}']),
    ('\u{1F8B}', &['\u{1F03}', '\u{03B9}']),
    ('\u{1F8C}', &['\u{1F04}', '\u{03B9}']),
    ('\u{1F8D}', &['\u{1F05}', '\u{03B9}']),
    ('\u{1F8E}', &['\u{1F06}', '\u{03B9}']),
    ('\u{1F8F}', &['\u{1F07}', '\u{03B9}']),
    ('\u{1F90}', &['\u{1F20}', '\u{03B9}']),
    ('\u{1F91}', &['\u{1F21}', '\u{03B9}']),
    ('\u{1F92}', &['\u{1F22}', '\u{03B9}']),
    ('\u{1F93}', &['\u{1F23}', '\u{03B9}']),
    ('\u{1F94}', &['\u{1F24}', '\u{03B9}']),
    ('\u{1F95}', &['\u{1F25}', '\u{03B9}']),
    ('\u{1F96}', &['\u{1F26}', '\u{03B9}']),
    ('\u{1F97}', &['\u{1F27}', '\u{03B9}']),
    ('\u{1F98}', &['\u{1F20}', '\u{03B9}']),
    ('\u{1F99}', &['\u{1F21}', '\u{03B9}']),
    ('\u{1F9A}', &['\u{1F22}', '\u{03B9}']),
    ('\u{1F9B}', &['\u{1F23}', '\u{03B9}']),
    ('\u{1F9C}', &['\u{1F24}', '\u{03B9}']),
    ('\u{1F9D}', &['\u{1F25}', '\u{03B9}']),
    ('\u{1F9E}', &['\u{1F26}', '\u{03B9}']),
    ('\u{1F9F}', &['\u{1F27}', '\u{03B9}']),
    ('\u{1FA0}', &['\u{1F60}', '\u{03B9}']),
    ('\u{1FA1}', &['\u{1F61}', '\u{03B9}']),
    ('\u{1FA2}', &['\u{1F62}', '\u{03B9}']),
    ('\u{1FA3}', &['\u{1F63}', '\u{03B9}']),
    ('\u{1FA4}', &['\u{1F64}', '\u{03B9}']),
    ('\u{1FA5}', &['\u{1F65}', '\u{03B9}']),
    ('\u{1FA6}', &['\u{1F66}', '\u{03B9}']),
    ('\u{1FA7}', &['\u{1F67}', '\u{03B9}']),
    ('\u{1FA8}', &['\u{1F60}', '\u{03B9}']),
    ('\u{1FA9}', &['\u{1F61}', '\u{03B9}']),
    ('\u{1FAA}', &['\u{1F62}', '\u{03B9}']),
    ('\u{1FAB}', &['\u{1F63}', '\u{03B9}']),
    ('\u{1FAC}', &['\u{1F64}', '\u{03B9}']),
    ('\u{1FAD}', &['\u{1F65}', '\u{03B9}']),
    ('\u{1FAE}', &['\u{1F66}', '\u{03B9}']),
    ('\u{1FAF}', &['\u{1F67}', '\u{03B9}']),
    ('\u{1FB2}', &['\u{1F70}', '\u{03B9}']),
    ('\u{1FB3}', &['\u{03B1}', '\u{03B9}']),
    ('\u{1FB4}', &['\u{03AC}', '\u{03B9}']),
    ('\u{1FB6}', &['\u{03B1}', '\u{0342}']),
    ('\u{1FB7}', &['\u{03B1}', '\u{0342}', '\u{03B9}']),
    ('\u{1FBC}', &['\u{03B1}', '\u{03B9}']),
    ('\u{1FC2}', &['\u{1F74}', '\u{03B9}']),
    ('\u{1FC3}', &['\u{03B7}', '\u{03B9}']),
    ('\u{1FC4}', &['\u{03AE}', '\u{03B9}']),
    ('\u{1FC6}', &['\u{03B7}', '\u{0342}']),
    ('\u{1FC7}', &['\u{03B7}', '\u{0342}', '\u{03B9}']),
    ('\u{1FCC}', &['\u{03B7}', '\u{03B9}']),
    ('\u{1FD2}', &['\u{03B9}', '\u{0308}', '\u{0300}']),
    ('\u{1FD3}', &['\u{03B9}', '\u{0308}', '\u{0301}']),
    ('\u{1FD6}', &['\u{03B9}', '\u{0342}']),
    ('\u{1FD7}', &['\u{03B9}', '\u{0308}', '\u{0342}']),
    ('\u{1FE2}', &['\u{03C5}', '\u{0308}', '\u{0300}']),
    ('\u{1FE3}', &['\u{03C5}', '\u{0308}', '\u{0301}']),
    ('\u{1FE4}', &['\u{03C1}', '\u{0313}']),
    ('\u{1FE6}', &['\u{03C5}', '\u{0342}']),
    ('\u{1FE7}', &['\u{03C5}', '\u{0308}', '\u{0342}']),
    ('\u{1FF2}', &['\u{1F7C}', '\u{03B9}']),
    ('\u{1FF3}', &['\u{03C9}', '\u{03B9}']),
    ('\u{1FF4}', &['\u{03CE}', '\u{03B9}']),
    ('\u{1FF6}', &['\u{03C9}', '\u{0342}']),
    ('\u{1FF7}', &['\u{03C9}', '\u{0342}', '\u{03B9}']),
    ('\u{1FFC}', &['\u{03C9}', '\u{03B9}']),
    ('\u{FB00}', &['\u{0066}', '\u{0066}']),
    ('\u{FB01}', &['\u{0066}', '\u{0069}']),
    ('\u{FB02}', &['\u{0066}', '\u{006C}']),
    ('\u{FB03}', &['\u{0066}', '\u{0066}', '\u{0069}']),
    ('\u{FB04}', &['\u{0066}', '\u{0066}', '\u{006C}']),
    ('\u{FB05}', &['\u{0073}', '\u{0074}']),
    ('\u{FB06}', &['\u{0073}', '\u{0074}']),
    ('\u{FB13}', &['\u{0574}', '\u{0576}']),
    ('\u{FB14}', &['\u{0574}', '\u{0565}']),
    ('\u{FB15}', &['\u{0574}', '\u{056B}']),
    ('\u{FB16}', &['\u{057E}', '\u{0576}']),
    ('\u{FB17}', &['\u{0574}', '\u{056D}']),
];
