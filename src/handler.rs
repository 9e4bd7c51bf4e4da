//! # 命令处理逻辑模块
//!
//! 包含处理 `hide`、`recover`、`check` 和 `info` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、图像编解码、调用核心隐写算法以及向用户报告结果。

use crate::cli::{CheckArgs, HideArgs, InfoArgs, RecoverArgs};
use crate::format::ImageKind;
use crate::steganography::{self, required_bits};
use anyhow::{Context, Result};
use colored::Colorize;
use image::GenericImageView;
use std::fs;
use std::path::{Path, PathBuf};

/// 读取图像文件并展平为 RGBA8 像素缓冲区。
/// 隐写核心把它当作一块连续的字节数组 (宽 × 高 × 4)。
fn load_pixels(path: &Path) -> Result<image::RgbaImage> {
    let picture = image::open(path).with_context(|| {
        format!(
            "Unable to read image file: {}",
            path.to_string_lossy().red().bold()
        )
    })?;

    Ok(picture.into_rgba8())
}

/// 检查输出路径是否可以写入；文件已存在且未指定 `--force` 时报错。
fn ensure_writable(path: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !path.exists(),
        "Output file already exists: {}. \nUse --force to overwrite it.",
        path.to_string_lossy().red().bold()
    );
    Ok(())
}

/// 'hide' 的默认输出路径：输入图像同目录下的 "doctored_<原文件名>"。
fn default_hide_dest(image: &Path) -> PathBuf {
    let name = image
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("doctored_{name}"))
}

/// 'recover' 的默认输出路径：图像同目录下的 "recovered_<图像文件名>.txt"。
fn default_recover_dest(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    image.with_file_name(format!("recovered_{stem}.txt"))
}

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像和文本文件、检查隐写空间是否足够、调用隐写核心函数写入头部和消息比特，
/// 最后将结果图像序列化到目标路径。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和 `--force` 标志的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 目标格式是有损的 (如 JPEG)，重编码会破坏隐藏的比特。
/// * 无法读取输入的图像或文本文件。
/// * 图像的像素缓冲区没有足够的比特容量来隐藏文本。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = args.dest.unwrap_or_else(|| default_hide_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let kind = ImageKind::from_path(&dest);
    anyhow::ensure!(
        kind.is_lossless(),
        "The destination format of {} is lossy or unrecognized. \nRe-encoding would destroy the hidden bits; choose a lossless format such as PNG, BMP or TGA.",
        dest.to_string_lossy().red().bold()
    );

    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let mut picture = load_pixels(&args.image)?;

    let required_space = required_bits(text.len());
    let available_space = picture.as_raw().len();

    anyhow::ensure!(
        steganography::can_encode(text.len(), available_space),
        "Not enough space in the image to hide the text. \nRequired: {} bits, Available: {} bits",
        required_space.to_string().red().bold(),
        available_space.to_string().green().bold()
    );

    steganography::encode(&mut picture, &text).with_context(|| {
        "Failed to hide the message in the image. \nThe pixel buffer is smaller than the message requires."
    })?;

    picture.save(&dest).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Recover' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用恢复核心函数获取消息比特长度和消息字节，
/// 最后将恢复的文本内容写入目标文本文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径和 `--force` 标志的 `RecoverArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 输出文件已存在且未指定 `--force`。
/// * 无法读取输入的图像文件。
/// * 图像的隐写头部损坏 (声明的长度超出像素缓冲区)。
/// * 无法写入到目标文本文件。
pub fn handle_recover(args: RecoverArgs) -> Result<()> {
    let dest = args.text.unwrap_or_else(|| default_recover_dest(&args.image));
    ensure_writable(&dest, args.force)?;

    let picture = load_pixels(&args.image)?;

    let (text, len_bits) = steganography::decode(picture.as_raw()).with_context(|| {
        format!(
            "Failed to recover the hidden message from '{}'. \nThe image may not contain a hidden message or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, &text).with_context(|| {
        format!(
            "Unable to write to target text file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The text has been successfully recovered and saved: {} ({} hidden bits)",
        dest.to_string_lossy().green().bold(),
        len_bits
    );

    Ok(())
}

/// 处理 'Check' 命令的执行逻辑。
///
/// 只做容量预检查并报告结果，不修改也不写出任何文件。
/// 容量不足不是错误，而是一个正常的否定回答。
///
/// # Errors
///
/// 仅当无法读取输入的图像或文本文件时返回错误。
pub fn handle_check(args: CheckArgs) -> Result<()> {
    let text = fs::read(&args.text).with_context(|| {
        format!(
            "Unable to read text file: {}",
            args.text.to_string_lossy().red().bold()
        )
    })?;

    let picture = load_pixels(&args.image)?;

    let required_space = required_bits(text.len());
    let available_space = picture.as_raw().len();

    if steganography::can_encode(text.len(), available_space) {
        println!(
            "It is possible to encode the message into the image. \nRequired: {} bits, Available: {} bits",
            required_space.to_string().green().bold(),
            available_space.to_string().green().bold()
        );
    } else {
        println!(
            "It is not possible to encode the message into the image. \nRequired: {} bits, Available: {} bits",
            required_space.to_string().red().bold(),
            available_space.to_string().green().bold()
        );
    }

    Ok(())
}

/// 处理 'Info' 命令的执行逻辑。
///
/// 根据扩展名查表得到容器格式的说明，并读取图像以报告尺寸、
/// 通道数和像素数据大小。
///
/// # Errors
///
/// 仅当无法读取或解码输入的图像文件时返回错误。
pub fn handle_info(args: InfoArgs) -> Result<()> {
    let kind = ImageKind::from_path(&args.image);

    let picture = image::open(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let (width, height) = picture.dimensions();
    let channels = picture.color().channel_count();

    println!("{}", kind.description());
    println!(
        "Dimensions: {} x {}, Channels: {}",
        width.to_string().green().bold(),
        height.to_string().green().bold(),
        channels.to_string().green().bold()
    );
    println!(
        "Pixel data size: {} bytes",
        (width as usize * height as usize * channels as usize)
            .to_string()
            .green()
            .bold()
    );

    Ok(())
}
