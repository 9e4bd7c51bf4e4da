use crate::constants::{BITS_PER_BYTE, STEG_HEADER_BITS};
use crate::error::StegoError;

/// 消息加头部所需的比特数 (每个像素字节承载 1 bit)。
pub fn required_bits(message_len: usize) -> usize {
    message_len
        .saturating_mul(BITS_PER_BYTE)
        .saturating_add(STEG_HEADER_BITS)
}

pub fn can_encode(message_len: usize, pixel_len: usize) -> bool {
    // 头部是 32 位的，比特长度超出 u32 表示范围的消息永远放不下，
    // 无论像素缓冲区 (以 usize 计) 有多大。
    message_len
        .checked_mul(BITS_PER_BYTE)
        .and_then(|bits| u32::try_from(bits).ok())
        .map_or(false, |_| required_bits(message_len) <= pixel_len)
}

pub fn check_capacity(message_len: usize, pixel_len: usize) -> Result<(), StegoError> {
    if can_encode(message_len, pixel_len) {
        Ok(())
    } else {
        Err(StegoError::CapacityExceeded {
            required: required_bits(message_len),
            available: pixel_len,
        })
    }
}

pub fn encode(pix: &mut [u8], message: &[u8]) -> Result<(), StegoError> {
    // 容量不足时不得修改缓冲区的任何字节；
    // 比特长度放不进 32 位头部的消息同样按容量不足拒绝。
    check_capacity(message.len(), pix.len())?;

    let len_bits = u32::try_from(message.len() * BITS_PER_BYTE).map_err(|_| {
        StegoError::CapacityExceeded {
            required: required_bits(message.len()),
            available: pix.len(),
        }
    })?;

    // 头部：32 位消息比特长度，高位在前，每字节只覆盖最低位。
    for i in 0..STEG_HEADER_BITS {
        let bit = ((len_bits >> (STEG_HEADER_BITS - 1 - i)) & 1) as u8;
        pix[i] = (pix[i] & 0xFE) | bit;
    }

    // 消息：逐字节、高位在前地写入头部之后的像素字节。
    for (i, &byte) in message.iter().enumerate() {
        for b in 0..BITS_PER_BYTE {
            let bit = (byte >> (BITS_PER_BYTE - 1 - b)) & 1;
            let dix = STEG_HEADER_BITS + i * BITS_PER_BYTE + b;
            pix[dix] = (pix[dix] & 0xFE) | bit;
        }
    }

    Ok(())
}

/// 从像素缓冲区的前 32 个字节的最低位重建消息比特长度。
fn read_len_bits(pix: &[u8]) -> Result<u32, StegoError> {
    if pix.len() < STEG_HEADER_BITS {
        return Err(StegoError::TruncatedBuffer { len: pix.len() });
    }

    let mut len_bits: u32 = 0;
    for &byte in &pix[..STEG_HEADER_BITS] {
        len_bits = (len_bits << 1) | (byte & 1) as u32;
    }

    // 头部声明的长度必须落在缓冲区内，否则视为损坏。
    if (len_bits as usize).checked_add(STEG_HEADER_BITS).map_or(true, |end| end > pix.len()) {
        return Err(StegoError::MalformedHeader {
            len_bits,
            available_bits: pix.len() - STEG_HEADER_BITS,
        });
    }

    Ok(len_bits)
}

pub fn decode_into(pix: &[u8], out: &mut [u8]) -> Result<u32, StegoError> {
    let len_bits = read_len_bits(pix)?;

    // 消息始终以整字节编码；非 8 的倍数的头部值截断到整字节。
    let message_len = len_bits as usize / BITS_PER_BYTE;
    if out.len() < message_len {
        return Err(StegoError::OutputBufferTooSmall {
            required: message_len,
            available: out.len(),
        });
    }

    for i in 0..message_len * BITS_PER_BYTE {
        let bit = pix[STEG_HEADER_BITS + i] & 1;
        out[i / BITS_PER_BYTE] = (out[i / BITS_PER_BYTE] << 1) | bit;
    }

    Ok(len_bits)
}

pub fn decode(pix: &[u8]) -> Result<(Vec<u8>, u32), StegoError> {
    let len_bits = read_len_bits(pix)?;
    let mut out = vec![0u8; len_bits as usize / BITS_PER_BYTE];
    decode_into(pix, &mut out)?;
    Ok((out, len_bits))
}
