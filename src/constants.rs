/// 隐写头部占用的像素字节数。
/// 头部是一个 32 位无符号整数，记录隐藏消息的比特长度；
/// 每个像素字节的最低位存储 1 bit，因此需要 32 个字节。
pub const STEG_HEADER_BITS: usize = 32;

/// 每个消息字节包含的比特数。
/// 每个像素字节只承载 1 bit，所以隐藏一个字节需要 8 个像素字节。
pub const BITS_PER_BYTE: usize = 8;
