use crate::core::targets::{LIGHT, MATERIAL, SCENE};
use crate::core::types::{Colour, IdToken, MaterialIndex, Number, Point3, Vector3};
use crate::light::directional::DirectionalLight;
use crate::light::point::PointLight;
use crate::light::LightInstance;
use crate::material::solid::SolidColourMaterial;
use crate::material::MaterialInstance;
use crate::mesh::plane::PlaneMesh;
use crate::mesh::sphere::SphereMesh;
use crate::mesh::triangle::CullMode;
use crate::mesh::triangle_mesh::TriangleMesh;
use crate::scene::{
    LightToken, PlaneToken, Scene, SceneError, SceneOpts, SphereToken, TriangleMeshToken, MAX_MATERIALS,
};
use std::fmt::Display;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, trace, warn};

/// Collects the contents of a [Scene], before it is built.
///
/// Every `add_*` method appends an item and returns a token for it. Items are never removed or reordered, so tokens
/// stay valid for the lifetime of the builder, and can be used to modify the item in-place with the `*_mut` methods.
///
/// Materials are referenced by index instead of by token, since meshes need to store them. The builder always
/// starts with a single solid colour material at index `0` (see [SceneOpts::default_material_colour]).
///
/// Tokens can only be used with the builder that created them (or a clone of it).
#[derive(Clone, Debug)]
pub struct SceneBuilder {
    /// Unique per builder, stamped into every token it creates
    id: IdToken,
    scene: Scene,
}

static NEXT_BUILDER_ID: AtomicUsize = AtomicUsize::new(0);

// region Constructors

impl SceneBuilder {
    pub fn new() -> Self { Self::with_opts(SceneOpts::default()) }

    pub fn with_opts(opts: SceneOpts) -> Self {
        trace!(target: SCENE, ?opts, "creating scene builder");

        let capacity = opts.reserve_capacity;
        let mut materials = Vec::with_capacity(capacity.clamp(1, MAX_MATERIALS));
        materials.push(SolidColourMaterial::from(opts.default_material_colour).into());

        Self {
            id: NEXT_BUILDER_ID.fetch_add(1, Ordering::Relaxed),
            scene: Scene {
                spheres: reserved(capacity),
                planes: reserved(capacity),
                triangle_meshes: reserved(capacity),
                lights: reserved(capacity),
                materials,
            },
        }
    }
}

/// Creates a vec with space for `capacity` items. The reservation is only a hint, so a capacity that can't be
/// allocated gives an empty vec instead of aborting
fn reserved<T>(capacity: usize) -> Vec<T> {
    let mut items = Vec::new();
    if let Err(err) = items.try_reserve_exact(capacity) {
        warn!(target: SCENE, capacity, %err, "could not reserve scene storage");
    }
    items
}

impl Default for SceneBuilder {
    fn default() -> Self { Self::new() }
}

// endregion Constructors

// region Meshes

impl SceneBuilder {
    pub fn add_sphere(&mut self, pos: impl Into<Point3>, radius: Number, material: MaterialIndex) -> SphereToken {
        let token = SphereToken { builder: self.id, index: self.scene.spheres.len() };
        let sphere = SphereMesh::new(pos, radius, material);
        trace!(target: SCENE, %token, ?sphere, "adding sphere");
        self.scene.spheres.push(sphere);
        token
    }

    pub fn add_plane(
        &mut self,
        pos: impl Into<Point3>,
        normal: impl Into<Vector3>,
        material: MaterialIndex,
    ) -> PlaneToken {
        let token = PlaneToken { builder: self.id, index: self.scene.planes.len() };
        let plane = PlaneMesh::new(pos, normal, material);
        trace!(target: SCENE, %token, ?plane, "adding plane");
        self.scene.planes.push(plane);
        token
    }

    pub fn add_triangle_mesh(&mut self, mesh: TriangleMesh) -> TriangleMeshToken {
        let token = TriangleMeshToken { builder: self.id, index: self.scene.triangle_meshes.len() };
        trace!(
            target: SCENE,
            %token,
            vertices = mesh.positions().len(),
            faces = mesh.face_count(),
            "adding triangle mesh"
        );
        self.scene.triangle_meshes.push(mesh);
        token
    }

    /// Creates a triangle mesh from vertex and index buffers (see [TriangleMesh::from_positions]), and adds it
    pub fn add_triangle_mesh_from_positions(
        &mut self,
        positions: impl Into<Vec<Point3>>,
        indices: impl Into<Vec<usize>>,
        cull_mode: CullMode,
        material: MaterialIndex,
    ) -> Result<TriangleMeshToken, SceneError> {
        let mesh = TriangleMesh::from_positions(positions, indices, cull_mode, material)?;
        Ok(self.add_triangle_mesh(mesh))
    }

    #[track_caller]
    pub fn sphere_mut(&mut self, token: SphereToken) -> &mut SphereMesh {
        lookup_mut(self.id, &mut self.scene.spheres, token.builder, token.index, token)
    }

    #[track_caller]
    pub fn plane_mut(&mut self, token: PlaneToken) -> &mut PlaneMesh {
        lookup_mut(self.id, &mut self.scene.planes, token.builder, token.index, token)
    }

    /// Mutable access to a triangle mesh. Only the cull mode and material can be changed, the buffers are fixed
    #[track_caller]
    pub fn triangle_mesh_mut(&mut self, token: TriangleMeshToken) -> &mut TriangleMesh {
        lookup_mut(self.id, &mut self.scene.triangle_meshes, token.builder, token.index, token)
    }
}

// endregion Meshes

// region Lights

impl SceneBuilder {
    pub fn add_light(&mut self, light: impl Into<LightInstance>) -> LightToken {
        let token = LightToken { builder: self.id, index: self.scene.lights.len() };
        let light = light.into();
        trace!(target: LIGHT, %token, ?light, "adding light");
        self.scene.lights.push(light);
        token
    }

    pub fn add_point_light(&mut self, pos: impl Into<Point3>, intensity: Number, colour: impl Into<Colour>) -> LightToken {
        self.add_light(PointLight::new(pos, intensity, colour))
    }

    /// Adds a light shining along `direction`, which is normalised by the light.
    ///
    /// Fails if the direction cannot be normalised
    pub fn add_directional_light(
        &mut self,
        direction: impl Into<Vector3>,
        intensity: Number,
        colour: impl Into<Colour>,
    ) -> Result<LightToken, SceneError> {
        let direction = direction.into();
        let light = DirectionalLight::new(direction, intensity, colour).map_err(|err| {
            warn!(target: LIGHT, ?direction, %err, "could not add directional light");
            err
        })?;
        Ok(self.add_light(light))
    }

    #[track_caller]
    pub fn light_mut(&mut self, token: LightToken) -> &mut LightInstance {
        lookup_mut(self.id, &mut self.scene.lights, token.builder, token.index, token)
    }
}

// endregion Lights

// region Materials

impl SceneBuilder {
    /// Adds a material to the scene, returning the index that meshes should use to reference it.
    ///
    /// Fails if the scene already holds [MAX_MATERIALS] materials
    pub fn add_material(&mut self, material: impl Into<MaterialInstance>) -> Result<MaterialIndex, SceneError> {
        let index = MaterialIndex::try_from(self.scene.materials.len()).map_err(|_| {
            warn!(target: MATERIAL, max = MAX_MATERIALS, "material limit reached");
            SceneError::TooManyMaterials { max: MAX_MATERIALS }
        })?;

        let material = material.into();
        trace!(target: MATERIAL, index, ?material, "adding material");
        self.scene.materials.push(material);
        Ok(index)
    }

    /// Mutable access to a material, including the default material at index `0`
    pub fn material_mut(&mut self, index: MaterialIndex) -> Option<&mut MaterialInstance> {
        self.scene.materials.get_mut(index as usize)
    }
}

// endregion Materials

impl SceneBuilder {
    /// A read-only view of the scene as it currently is
    pub fn scene(&self) -> &Scene { &self.scene }

    /// Freezes the builder into an immutable scene
    pub fn build(self) -> Scene {
        let scene = self.scene;
        debug!(
            target: SCENE,
            spheres = scene.spheres.len(),
            planes = scene.planes.len(),
            triangle_meshes = scene.triangle_meshes.len(),
            lights = scene.lights.len(),
            materials = scene.materials.len(),
            "built scene"
        );
        scene
    }
}

/// Gets the item a token refers to
///
/// # Panics
/// If the token was not created by this builder
#[track_caller]
fn lookup_mut<T>(
    builder_id: IdToken,
    items: &mut [T],
    token_builder: IdToken,
    index: usize,
    token: impl Display,
) -> &mut T {
    match items.get_mut(index) {
        Some(item) if token_builder == builder_id => item,
        _ => panic!("invalid token {token}, not created by this builder"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Channel;
    use crate::light::Light;
    use crate::material::Material;
    use crate::shared::hit::HitRecord;

    fn shade_red_channel(material: &MaterialInstance) -> Channel {
        let hit = HitRecord {
            pos: Point3::ZERO,
            normal: Vector3::Y,
            dist: 0.,
            material: 0,
        };
        material.shade(&hit, Vector3::Y, Vector3::Y).r()
    }

    #[test]
    fn default_material_is_present() {
        let scene = SceneBuilder::new().build();
        assert_eq!(scene.materials().len(), 1);
        let default = scene.material(0).expect("default material exists");
        assert_eq!(shade_red_channel(default), 1.);

        let opts = SceneOpts {
            default_material_colour: Colour::GREEN,
            ..Default::default()
        };
        let scene = SceneBuilder::with_opts(opts).build();
        let default = scene.material(0).expect("default material exists");
        assert_eq!(shade_red_channel(default), 0.);
    }

    #[test]
    fn material_indices_are_sequential() {
        let mut builder = SceneBuilder::new();
        assert_eq!(builder.add_material(Colour::BLUE), Ok(1));
        assert_eq!(builder.add_material(Colour::YELLOW), Ok(2));
        assert_eq!(builder.scene().materials().len(), 3);
    }

    #[test]
    fn material_limit() {
        let mut builder = SceneBuilder::new();
        for expected in 1..MAX_MATERIALS {
            assert_eq!(builder.add_material(Colour::WHITE), Ok(expected as MaterialIndex));
        }
        assert_eq!(
            builder.add_material(Colour::WHITE),
            Err(SceneError::TooManyMaterials { max: MAX_MATERIALS })
        );
        assert_eq!(builder.build().materials().len(), MAX_MATERIALS);
    }

    #[test]
    fn tokens_survive_growth() {
        let mut builder = SceneBuilder::with_opts(SceneOpts {
            reserve_capacity: 0,
            ..Default::default()
        });
        let first = builder.add_sphere(Point3::ZERO, 1., 0);
        let tokens = (1..100)
            .map(|i| builder.add_sphere((i as Number, 0., 0.), 1., 0))
            .collect::<Vec<_>>();

        builder.sphere_mut(first).radius = 5.;
        assert_eq!(builder.sphere_mut(first).pos, Point3::ZERO);
        assert_eq!(builder.sphere_mut(tokens[41]).pos, Point3::new(42., 0., 0.));

        let scene = builder.build();
        assert_eq!(scene.spheres()[first.index()].radius, 5.);
        assert_eq!(scene.spheres().len(), 100);
    }

    #[test]
    fn mutate_through_tokens() {
        let mut builder = SceneBuilder::new();
        let plane = builder.add_plane(Point3::ZERO, Vector3::Y, 0);
        let light = builder.add_point_light((0., 5., 0.), 10., Colour::WHITE);
        let mesh = builder
            .add_triangle_mesh_from_positions(vec![Point3::ZERO, Point3::X, Point3::Y], vec![0, 1, 2], CullMode::None, 0)
            .expect("mesh is valid");

        builder.plane_mut(plane).pos.y = -1.;
        builder.triangle_mesh_mut(mesh).set_cull_mode(CullMode::FrontFace);
        if let LightInstance::PointLight(point) = builder.light_mut(light) {
            point.intensity = 20.;
        }

        let scene = builder.build();
        assert_eq!(scene.planes()[plane.index()].pos, Point3::new(0., -1., 0.));
        assert_eq!(scene.triangle_meshes()[mesh.index()].cull_mode(), CullMode::FrontFace);
        assert_eq!(scene.lights()[light.index()].radiance(Point3::new(0., 3., 0.)), Colour::WHITE * 5.);
    }

    #[test]
    fn invalid_inputs_are_errors() {
        let mut builder = SceneBuilder::new();
        assert!(matches!(
            builder.add_directional_light(Vector3::ZERO, 1., Colour::WHITE),
            Err(SceneError::InvalidLight(_))
        ));
        assert!(matches!(
            builder.add_triangle_mesh_from_positions(vec![Point3::ZERO], vec![0, 1, 2], CullMode::None, 0),
            Err(SceneError::InvalidMesh(_))
        ));
        assert!(builder.scene().lights().is_empty());
        assert!(builder.scene().triangle_meshes().is_empty());
    }

    #[test]
    #[should_panic(expected = "invalid token")]
    fn foreign_token_panics() {
        let mut other = SceneBuilder::new();
        other.add_sphere(Point3::ZERO, 1., 0);
        let token = other.add_sphere(Point3::ZERO, 1., 0);

        let mut builder = SceneBuilder::new();
        builder.sphere_mut(token);
    }

    #[test]
    #[should_panic(expected = "invalid token")]
    fn foreign_token_in_range_panics() {
        let mut other = SceneBuilder::new();
        let token = other.add_light(PointLight::new(Point3::ZERO, 1., Colour::WHITE));

        // Same index exists in this builder, but belongs to something else
        let mut builder = SceneBuilder::new();
        builder.add_point_light(Point3::ONE, 2., Colour::RED);
        builder.light_mut(token);
    }

    #[test]
    fn huge_reserve_capacity_is_ignored() {
        let opts = SceneOpts {
            reserve_capacity: usize::MAX,
            ..Default::default()
        };
        let mut builder = SceneBuilder::with_opts(opts);
        let sphere = builder.add_sphere(Point3::ZERO, 1., 0);
        let scene = builder.build();

        assert_eq!(scene.spheres()[sphere.index()].radius, 1.);
        assert_eq!(scene.materials().len(), 1);
    }

    #[test]
    fn cloned_builder_accepts_tokens() {
        let mut builder = SceneBuilder::new();
        let sphere = builder.add_sphere(Point3::ZERO, 1., 0);
        let mut cloned = builder.clone();
        cloned.sphere_mut(sphere).radius = 3.;

        assert_eq!(builder.scene().spheres()[sphere.index()].radius, 1.);
        assert_eq!(cloned.scene().spheres()[sphere.index()].radius, 3.);
    }

    #[test]
    fn tokens_display_with_type_name() {
        let mut builder = SceneBuilder::new();
        let token = builder.add_plane(Point3::ZERO, Vector3::Y, 0);
        assert!(token.to_string().starts_with("PlaneToken#"));
    }
}
