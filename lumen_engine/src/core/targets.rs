use crate::tracing_targets;

tracing_targets! {
    SCENE = "scene",
    MESH = "mesh",
    OBJ = "obj",
    LIGHT = "light",
    MATERIAL = "material",
}
