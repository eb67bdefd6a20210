mod context;
mod types;
mod uniforms;

pub use context::*;
pub use types::*;
pub use uniforms::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_error_adapter_not_found_display() {
        let err = RendererError::AdapterNotFound;
        assert_eq!(err.to_string(), "no suitable GPU adapter found");
    }

    #[test]
    fn renderer_error_surface_display() {
        let err = RendererError::SurfaceError("timeout".to_string());
        assert_eq!(err.to_string(), "surface error: timeout");
    }

    #[test]
    fn renderer_error_context_lost_display() {
        let err = RendererError::ContextLost("out of memory".to_string());
        assert_eq!(err.to_string(), "GPU context lost: out of memory");
    }

    #[test]
    fn renderer_error_converts_into_app_error() {
        let err: vinoria_common::VinoriaError = RendererError::AdapterNotFound.into();
        assert!(err.to_string().contains("no suitable GPU adapter found"));
    }

    #[test]
    fn physical_size_zero_detection() {
        assert!(PhysicalSize { width: 0, height: 600 }.is_zero());
        assert!(PhysicalSize { width: 800, height: 0 }.is_zero());
        assert!(!PhysicalSize { width: 800, height: 600 }.is_zero());
    }
}
