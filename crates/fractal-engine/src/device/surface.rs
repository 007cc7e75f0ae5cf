use winit::dpi::PhysicalSize;

use super::SurfaceErrorAction;

pub(crate) fn choose_surface_format(
    formats: &[wgpu::TextureFormat],
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if formats.is_empty() {
        return None;
    }

    if prefer_srgb {
        let preferred = [
            wgpu::TextureFormat::Bgra8UnormSrgb,
            wgpu::TextureFormat::Rgba8UnormSrgb,
        ];
        for f in preferred {
            if formats.contains(&f) {
                return Some(f);
            }
        }
    }

    Some(formats[0])
}

pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: Option<wgpu::CompositeAlphaMode>,
) -> wgpu::CompositeAlphaMode {
    requested
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}

/// wgpu cannot configure a 0×0 surface (minimized window); the new size is
/// recorded and configuration is deferred until it becomes non-zero.
///
/// Returns whether the surface must be reconfigured.
pub(crate) fn apply_resize(
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) -> bool {
    *size = new_size;
    if new_size.width == 0 || new_size.height == 0 {
        return false;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    true
}

pub(crate) fn map_surface_error(err: &wgpu::SurfaceError) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceErrorAction::Reconfigured,
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout | wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    fn config() -> wgpu::SurfaceConfiguration {
        wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: TextureFormat::Bgra8UnormSrgb,
            width: 900,
            height: 900,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: CompositeAlphaMode::Auto,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        }
    }

    // ── surface format ────────────────────────────────────────────────────

    #[test]
    fn prefers_srgb_when_available() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, true), Some(TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn falls_back_to_first_format() {
        let formats = [TextureFormat::Bgra8Unorm, TextureFormat::Rgba8UnormSrgb];
        assert_eq!(choose_surface_format(&formats, false), Some(TextureFormat::Bgra8Unorm));
        assert_eq!(choose_surface_format(&[TextureFormat::Rgba16Float], true), Some(TextureFormat::Rgba16Float));
    }

    #[test]
    fn no_formats_is_none() {
        assert_eq!(choose_surface_format(&[], true), None);
    }

    // ── alpha mode ────────────────────────────────────────────────────────

    #[test]
    fn unsupported_alpha_request_uses_first_supported() {
        let supported = [CompositeAlphaMode::Opaque, CompositeAlphaMode::PreMultiplied];
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PostMultiplied)),
            CompositeAlphaMode::Opaque
        );
        assert_eq!(
            choose_alpha_mode(&supported, Some(CompositeAlphaMode::PreMultiplied)),
            CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(choose_alpha_mode(&[], None), CompositeAlphaMode::Auto);
    }

    // ── resize ────────────────────────────────────────────────────────────

    #[test]
    fn zero_size_defers_configuration() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(900, 900);
        assert!(!apply_resize(&mut cfg, &mut size, PhysicalSize::new(0, 600)));
        assert_eq!(size, PhysicalSize::new(0, 600));
        assert_eq!((cfg.width, cfg.height), (900, 900));
    }

    #[test]
    fn resize_updates_config() {
        let mut cfg = config();
        let mut size = PhysicalSize::new(900, 900);
        assert!(apply_resize(&mut cfg, &mut size, PhysicalSize::new(1200, 800)));
        assert_eq!((cfg.width, cfg.height), (1200, 800));
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn surface_errors_map_to_actions() {
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Lost), SurfaceErrorAction::Reconfigured);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Outdated), SurfaceErrorAction::Reconfigured);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::OutOfMemory), SurfaceErrorAction::Fatal);
        assert_eq!(map_surface_error(&wgpu::SurfaceError::Timeout), SurfaceErrorAction::SkipFrame);
    }
}
