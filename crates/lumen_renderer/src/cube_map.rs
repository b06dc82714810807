//! Cube map environment, the scene object of last resort.
//!
//! Every ray hits the environment at the largest representable distance,
//! so any real geometry along the ray wins. The color is looked up directly
//! from one of six square textures chosen by the dominant axis of the ray
//! direction.

use std::path::Path;

use crate::Color;
use lumen_core::{Texture, TgaResult};
use lumen_math::{Ray, Vec3};

/// One of the six faces of a cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeFace {
    PosX = 0,
    NegX = 1,
    PosY = 2,
    NegY = 3,
    PosZ = 4,
    NegZ = 5,
}

impl CubeFace {
    /// All faces in storage order.
    pub const ALL: [CubeFace; 6] = [
        CubeFace::PosX,
        CubeFace::NegX,
        CubeFace::PosY,
        CubeFace::NegY,
        CubeFace::PosZ,
        CubeFace::NegZ,
    ];

    /// Conventional file stem for this face (`posx`, `negx`, ...).
    pub fn file_stem(self) -> &'static str {
        match self {
            CubeFace::PosX => "posx",
            CubeFace::NegX => "negx",
            CubeFace::PosY => "posy",
            CubeFace::NegY => "negy",
            CubeFace::PosZ => "posz",
            CubeFace::NegZ => "negz",
        }
    }
}

/// Six-faced environment texture sampled by ray direction.
#[derive(Debug, Clone)]
pub struct CubeMap {
    faces: [Texture; 6],
}

impl CubeMap {
    /// Build a cube map from textures in [`CubeFace::ALL`] order.
    pub fn from_faces(faces: [Texture; 6]) -> Self {
        Self { faces }
    }

    /// A cube map that shows the same color in every direction.
    pub fn uniform(color: Color) -> Self {
        Self::from_faces(std::array::from_fn(|_| Texture::solid(color)))
    }

    /// Load the six faces from TGA files.
    pub fn load(
        posx: impl AsRef<Path>,
        negx: impl AsRef<Path>,
        posy: impl AsRef<Path>,
        negy: impl AsRef<Path>,
        posz: impl AsRef<Path>,
        negz: impl AsRef<Path>,
    ) -> TgaResult<Self> {
        Ok(Self::from_faces([
            Texture::load(posx)?,
            Texture::load(negx)?,
            Texture::load(posy)?,
            Texture::load(negy)?,
            Texture::load(posz)?,
            Texture::load(negz)?,
        ]))
    }

    /// Load `posx.tga` ... `negz.tga` from a directory.
    pub fn load_dir(dir: impl AsRef<Path>) -> TgaResult<Self> {
        let dir = dir.as_ref();
        let path = |face: CubeFace| dir.join(format!("{}.tga", face.file_stem()));
        let cube_map = Self::load(
            path(CubeFace::PosX),
            path(CubeFace::NegX),
            path(CubeFace::PosY),
            path(CubeFace::NegY),
            path(CubeFace::PosZ),
            path(CubeFace::NegZ),
        )?;
        log::debug!("Loaded cube map from {}", dir.display());
        Ok(cube_map)
    }

    pub fn face(&self, face: CubeFace) -> &Texture {
        &self.faces[face as usize]
    }

    /// The environment is always hit, as far away as possible.
    #[inline]
    pub fn intersect(&self, _ray: &Ray) -> f32 {
        f32::MAX
    }

    /// Color seen in `direction`.
    ///
    /// A zero direction selects no face and yields white.
    pub fn sample(&self, direction: Vec3) -> Color {
        match face_coordinates(direction) {
            Some((face, s, t)) => self.face(face).texel(s, t),
            None => Color::ONE,
        }
    }
}

/// Select the face hit by `d` and its `(s, t)` texture coordinates.
///
/// The dominant axis is tested in x, y, z order with ties going to the
/// earlier axis.
pub fn face_coordinates(d: Vec3) -> Option<(CubeFace, f32, f32)> {
    let (ax, ay, az) = (d.x.abs(), d.y.abs(), d.z.abs());
    let remap = |v: f32| (v + 1.0) * 0.5;

    if ax >= ay && ax >= az {
        if d.x > 0.0 {
            Some((CubeFace::PosX, 1.0 - remap(d.z / d.x), 1.0 - remap(d.y / d.x)))
        } else if d.x < 0.0 {
            Some((CubeFace::NegX, 1.0 - remap(d.z / d.x), remap(d.y / d.x)))
        } else {
            None
        }
    } else if ay >= az {
        if d.y > 0.0 {
            Some((CubeFace::PosY, remap(d.x / d.y), remap(d.z / d.y)))
        } else {
            Some((CubeFace::NegY, 1.0 - remap(d.x / d.y), remap(d.z / d.y)))
        }
    } else if d.z > 0.0 {
        Some((CubeFace::PosZ, remap(d.x / d.z), 1.0 - remap(d.y / d.z)))
    } else {
        Some((CubeFace::NegZ, remap(d.x / d.z), remap(d.y / d.z)))
    }
}
