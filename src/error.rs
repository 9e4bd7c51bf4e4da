//! # 核心错误类型模块
//!
//! 定义隐写核心算法可能返回的所有错误。
//! 核心本身不向终端输出任何文本，所有错误都作为值返回，
//! 由上层 (handler) 决定如何呈现。

use thiserror::Error;

/// 隐写核心操作的错误类型。
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StegoError {
    /// 消息 (加上头部) 超出了像素缓冲区的比特容量。
    #[error(
        "The message does not fit in the image: requires {required} bits, only {available} bits available."
    )]
    CapacityExceeded { required: usize, available: usize },

    /// 头部声明的消息长度超出了像素缓冲区的剩余容量。
    #[error(
        "Malformed steganographic header: it declares {len_bits} payload bits, but the image holds at most {available_bits}."
    )]
    MalformedHeader { len_bits: u32, available_bits: usize },

    /// 像素缓冲区太小，连 32 字节的头部都放不下。
    #[error("The pixel buffer ({len} bytes) is too small to contain a steganographic header.")]
    TruncatedBuffer { len: usize },

    /// 调用方提供的输出缓冲区小于消息所需的字节数。
    #[error("Output buffer too small: the message needs {required} bytes, the buffer holds {available}.")]
    OutputBufferTooSmall { required: usize, available: usize },
}
