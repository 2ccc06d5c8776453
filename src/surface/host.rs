use super::{Dimensions, Surface, SurfaceHandle};
use crate::config::EditorConfig;

/// Owns the editor's surface for as long as the host is mounted.
///
/// Sibling components borrow the handle through [`SurfaceHost::surface`];
/// the surface is disposed exactly once, on [`SurfaceHost::unmount`] or
/// when the host is dropped.
#[derive(Debug, Default)]
pub struct SurfaceHost {
    surface: Option<SurfaceHandle>,
}

impl SurfaceHost {
    /// Create the surface with the configured size and background
    pub fn mount(config: &EditorConfig) -> Self {
        let mut surface = Surface::new(Dimensions::new(config.canvas_width, config.canvas_height));
        surface.set_background(config.background.clone());
        surface.request_render();

        log::info!(
            "surface mounted ({}x{}, background {})",
            config.canvas_width,
            config.canvas_height,
            config.background
        );
        Self {
            surface: Some(surface.into_handle()),
        }
    }

    /// The shared surface, or `None` before mount / after unmount
    pub fn surface(&self) -> Option<&SurfaceHandle> {
        self.surface.as_ref()
    }

    pub fn is_mounted(&self) -> bool {
        self.surface.is_some()
    }

    /// Dispose the surface and drop the host's handle
    pub fn unmount(&mut self) {
        if let Some(surface) = self.surface.take() {
            if surface.write().dispose() {
                log::info!("surface disposed");
            }
        }
    }
}

impl Drop for SurfaceHost {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mount_uses_configuration() {
        let config = EditorConfig {
            canvas_width: 320.0,
            canvas_height: 240.0,
            background: "#eeeeee".to_owned(),
        };
        let host = SurfaceHost::mount(&config);
        let surface = host.surface().unwrap().read();
        assert_eq!(surface.width(), 320.0);
        assert_eq!(surface.height(), 240.0);
        assert_eq!(surface.background(), "#eeeeee");
    }

    #[test]
    fn unmount_disposes_shared_surface() {
        let mut host = SurfaceHost::mount(&EditorConfig::default());
        let shared = host.surface().cloned().unwrap();

        host.unmount();
        host.unmount();

        assert!(!host.is_mounted());
        assert!(shared.read().is_disposed());
    }

    #[test]
    fn dropping_the_host_disposes() {
        let host = SurfaceHost::mount(&EditorConfig::default());
        let shared = host.surface().cloned().unwrap();
        drop(host);
        assert!(shared.read().is_disposed());
    }
}
