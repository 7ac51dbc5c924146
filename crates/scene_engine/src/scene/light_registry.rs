//! Queries over the lights registered in a scene

use crate::lights::{LightFlag, LightType};
use super::{NodeId, Scene};

impl Scene {
    /// Light nodes currently in the scene, in the order they entered
    pub fn lights(&self) -> &[NodeId] {
        &self.lights
    }

    /// Whether `id` is in the light list
    pub fn contains_light(&self, id: NodeId) -> bool {
        self.lights.contains(&id)
    }

    /// Lights the renderer should bind for a mesh or camera with `mask`.
    ///
    /// Keeps registration order, skips disabled lights and lights whose flag
    /// does not intersect `mask`, and stops taking a light type once the
    /// configured per-type limit is reached.
    pub fn active_lights(&self, mask: LightFlag) -> Vec<NodeId> {
        let mut directional = 0;
        let mut point = 0;
        let mut spot = 0;

        let mut active = Vec::new();
        for &id in &self.lights {
            let Some(light) = self.light(id) else {
                continue;
            };
            if !light.is_enabled() || !light.light_flag().intersects(mask) {
                continue;
            }

            let (count, limit) = match light.light_type() {
                LightType::Directional => (&mut directional, self.config.max_directional_lights),
                LightType::Point => (&mut point, self.config.max_point_lights),
                LightType::Spot => (&mut spot, self.config.max_spot_lights),
            };
            if *count < limit {
                *count += 1;
                active.push(id);
            } else {
                log::trace!(
                    "Skipping light {:?}: {:?} limit of {} reached",
                    id,
                    light.light_type(),
                    limit
                );
            }
        }
        active
    }
}
