use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::text::{FontData, build_font_data};

use super::RenderCtx;

/// Handle to a texture owned by the [`AssetStore`].
///
/// `WHITE` is the built-in 1x1 white texture; failed loads resolve to it so a
/// missing file draws as a flat quad instead of crashing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct TextureId(pub u32);

impl TextureId {
    pub const WHITE: TextureId = TextureId(0);
}

/// Handle to a font owned by the [`AssetStore`].
///
/// `NONE` is the built-in empty font; text submitted against it lays out to
/// nothing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub u32);

impl FontId {
    pub const NONE: FontId = FontId(0);
}

struct TextureSlot {
    bind_group: wgpu::BindGroup,
    size: (u32, u32),
}

struct FontSlot {
    data: FontData,
    texture: TextureId,
}

/// Path-keyed texture and font caches.
///
/// Loading the same path twice returns the cached handle. Handles are plain
/// indices and stay valid for the store's lifetime; nothing is ever evicted.
pub struct AssetStore {
    textures: Vec<TextureSlot>,
    textures_by_path: HashMap<PathBuf, TextureId>,
    fonts: Vec<FontSlot>,
    fonts_by_path: HashMap<PathBuf, FontId>,
    nearest: wgpu::Sampler,
    linear: wgpu::Sampler,
}

impl AssetStore {
    pub fn new(ctx: &RenderCtx<'_>, texture_bgl: &wgpu::BindGroupLayout) -> Self {
        let nearest = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tessera nearest sampler"),
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::Repeat,
            address_mode_w: wgpu::AddressMode::Repeat,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let linear = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tessera linear sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        let mut store = Self {
            textures: Vec::new(),
            textures_by_path: HashMap::new(),
            fonts: Vec::new(),
            fonts_by_path: HashMap::new(),
            nearest,
            linear,
        };

        // Slot 0: the white fallback texture.
        store.upload_rgba(ctx, texture_bgl, 1, 1, &[255, 255, 255, 255]);
        // Slot 0: the empty fallback font.
        store.fonts.push(FontSlot {
            data: FontData::default(),
            texture: TextureId::WHITE,
        });

        store
    }

    /// Loads a PNG texture, or returns the cached handle for `path`.
    ///
    /// Returns [`TextureId::WHITE`] (with a warning) when the file is missing
    /// or fails to decode.
    pub fn load_texture(
        &mut self,
        ctx: &RenderCtx<'_>,
        texture_bgl: &wgpu::BindGroupLayout,
        path: &Path,
    ) -> TextureId {
        if let Some(&id) = self.textures_by_path.get(path) {
            return id;
        }
        log::info!("loading texture from {}", path.display());

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("failed to read texture file {}: {e}", path.display());
                return TextureId::WHITE;
            }
        };
        let image = match image::load_from_memory(&bytes) {
            Ok(i) => i.to_rgba8(),
            Err(e) => {
                log::warn!("failed to decode texture {}: {e}", path.display());
                return TextureId::WHITE;
            }
        };

        let (w, h) = image.dimensions();
        let id = self.upload_rgba(ctx, texture_bgl, w, h, image.as_raw());
        self.textures_by_path.insert(path.to_path_buf(), id);
        id
    }

    /// Loads a TrueType/OpenType font and bakes its glyph atlas, or returns
    /// the cached handle for `path`.
    ///
    /// Returns [`FontId::NONE`] (with a warning) when the file is missing or
    /// fails to parse.
    pub fn load_font(
        &mut self,
        ctx: &RenderCtx<'_>,
        texture_bgl: &wgpu::BindGroupLayout,
        path: &Path,
    ) -> FontId {
        if let Some(&id) = self.fonts_by_path.get(path) {
            return id;
        }
        log::info!("loading font from {}", path.display());

        let bytes = match std::fs::read(path) {
            Ok(b) => b,
            Err(e) => {
                log::warn!("failed to read font file {}: {e}", path.display());
                return FontId::NONE;
            }
        };
        let font = match fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default())
        {
            Ok(f) => f,
            Err(e) => {
                log::warn!("failed to parse font {}: {e}", path.display());
                return FontId::NONE;
            }
        };

        let data = build_font_data(&font);
        let texture = self.upload_r8(
            ctx,
            texture_bgl,
            data.atlas_width,
            data.atlas_height,
            &data.atlas_pixels,
        );

        let id = FontId(self.fonts.len() as u32);
        self.fonts.push(FontSlot { data, texture });
        self.fonts_by_path.insert(path.to_path_buf(), id);
        id
    }

    /// Bind group for a texture; unknown handles fall back to white.
    pub fn texture_bind_group(&self, id: TextureId) -> &wgpu::BindGroup {
        let slot = self
            .textures
            .get(id.0 as usize)
            .unwrap_or(&self.textures[0]);
        &slot.bind_group
    }

    pub fn texture_size(&self, id: TextureId) -> (u32, u32) {
        self.textures
            .get(id.0 as usize)
            .map(|s| s.size)
            .unwrap_or((1, 1))
    }

    /// Glyph table for a font; unknown handles fall back to the empty font.
    pub fn font_data(&self, id: FontId) -> &FontData {
        &self.fonts.get(id.0 as usize).unwrap_or(&self.fonts[0]).data
    }

    pub fn font_texture(&self, id: FontId) -> TextureId {
        self.fonts
            .get(id.0 as usize)
            .map(|f| f.texture)
            .unwrap_or(TextureId::WHITE)
    }

    fn upload_rgba(
        &mut self,
        ctx: &RenderCtx<'_>,
        texture_bgl: &wgpu::BindGroupLayout,
        w: u32,
        h: u32,
        pixels: &[u8],
    ) -> TextureId {
        self.upload(
            ctx,
            texture_bgl,
            w,
            h,
            pixels,
            wgpu::TextureFormat::Rgba8UnormSrgb,
            w * 4,
            false,
        )
    }

    fn upload_r8(
        &mut self,
        ctx: &RenderCtx<'_>,
        texture_bgl: &wgpu::BindGroupLayout,
        w: u32,
        h: u32,
        pixels: &[u8],
    ) -> TextureId {
        self.upload(ctx, texture_bgl, w, h, pixels, wgpu::TextureFormat::R8Unorm, w, true)
    }

    #[allow(clippy::too_many_arguments)]
    fn upload(
        &mut self,
        ctx: &RenderCtx<'_>,
        texture_bgl: &wgpu::BindGroupLayout,
        w: u32,
        h: u32,
        pixels: &[u8],
        format: wgpu::TextureFormat,
        bytes_per_row: u32,
        filtered: bool,
    ) -> TextureId {
        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tessera texture"),
            size: wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(bytes_per_row),
                rows_per_image: Some(h),
            },
            wgpu::Extent3d {
                width: w,
                height: h,
                depth_or_array_layers: 1,
            },
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = if filtered { &self.linear } else { &self.nearest };
        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tessera texture bind group"),
            layout: texture_bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        let id = TextureId(self.textures.len() as u32);
        self.textures.push(TextureSlot {
            bind_group,
            size: (w, h),
        });
        id
    }
}
