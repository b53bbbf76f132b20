use glam::Vec3;

/// Where a pickable sphere sits this frame.
#[derive(Debug, Clone, PartialEq)]
pub struct PickTarget {
    pub id: String,
    pub center: Vec3,
    /// Radius including emphasis, so what you see is what you can click.
    pub radius: f32,
}

/// Distance along the ray to the first intersection with a sphere, if any.
/// `ray_dir` must be normalized. Hits behind the origin are ignored.
#[inline]
pub fn ray_sphere(ray_origin: Vec3, ray_dir: Vec3, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray_origin - center;
    let b = oc.dot(ray_dir);
    let c = oc.dot(oc) - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt = disc.sqrt();
    let t = -b - sqrt;
    if t >= 0.0 {
        Some(t)
    } else {
        // Origin inside the sphere.
        let t = -b + sqrt;
        (t >= 0.0).then_some(t)
    }
}

/// Id of the nearest target hit by the ray.
pub fn pick_nearest<'a>(
    ray_origin: Vec3,
    ray_dir: Vec3,
    targets: impl IntoIterator<Item = &'a PickTarget>,
) -> Option<&'a str> {
    targets
        .into_iter()
        .filter_map(|t| ray_sphere(ray_origin, ray_dir, t.center, t.radius).map(|d| (d, t)))
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, t)| t.id.as_str())
}
