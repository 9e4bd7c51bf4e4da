//! # 图像格式查询模块
//!
//! 根据文件扩展名识别支持的图像容器格式。
//! 这里只做纯粹的查表，不涉及任何文件 I/O；
//! 实际的编解码由 `image` crate 完成。

use std::path::Path;

/// 按扩展名识别出的图像容器格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpg,
    Bmp,
    Tga,
    Tiff,
    Qoi,
    /// 无法识别 (或不支持) 的格式。
    Unrecognized,
}

impl ImageKind {
    /// 从文件路径的扩展名推断格式 (忽略大小写)。
    pub fn from_path(path: &Path) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return ImageKind::Unrecognized;
        };

        match ext.to_ascii_lowercase().as_str() {
            "png" => ImageKind::Png,
            "jpg" | "jpeg" => ImageKind::Jpg,
            "bmp" => ImageKind::Bmp,
            "tga" => ImageKind::Tga,
            "tif" | "tiff" => ImageKind::Tiff,
            "qoi" => ImageKind::Qoi,
            _ => ImageKind::Unrecognized,
        }
    }

    /// 该格式是否无损保留像素字节。
    /// 只有无损格式才能安全地承载 LSB 隐写数据；
    /// 有损压缩 (如 JPEG) 会在重编码时破坏最低位。
    pub fn is_lossless(self) -> bool {
        !matches!(self, ImageKind::Jpg | ImageKind::Unrecognized)
    }

    /// 返回该格式的简介，供 `info` 子命令展示。
    pub fn description(self) -> &'static str {
        match self {
            ImageKind::Png => {
                "Portable Network Graphics (PNG) is a raster-graphics file format that supports \
                 lossless data compression. PNG was developed as an improved, non-patented \
                 replacement for the Graphics Interchange Format (GIF)."
            }
            ImageKind::Jpg => {
                "JPEG is a commonly used method of lossy compression for digital images, \
                 particularly photographs. It typically achieves 10:1 compression with little \
                 perceptible loss in quality, but the recompression destroys LSB-hidden data."
            }
            ImageKind::Bmp => {
                "The BMP file format, also known as bitmap image file or device independent \
                 bitmap (DIB), is a raster graphics format used to store bitmap images \
                 independently of the display device, especially on Microsoft Windows and OS/2."
            }
            ImageKind::Tga => {
                "Truevision TGA, often referred to as TARGA, is a raster graphics file format \
                 created by Truevision Inc. It was the native format of the TARGA and VISTA \
                 boards, the first graphic cards for IBM-compatible PCs with truecolor display."
            }
            ImageKind::Tiff => {
                "Tag Image File Format (TIFF) is a flexible raster format widely used in \
                 publishing and photography; its uncompressed and deflate variants are lossless."
            }
            ImageKind::Qoi => {
                "The Quite OK Image format (QOI) is a simple, fast, losslessly compressed \
                 raster format with a single-page specification."
            }
            ImageKind::Unrecognized => "Unrecognized (or unsupported) image format.",
        }
    }
}
