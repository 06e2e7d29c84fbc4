use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::policy::{Balance, ByDepth, ByHeight, BySize};

/// Height-weighted quick-union with optional single-pass path halving.
pub type HeightWeighted = UnionFind<ByHeight>;

/// Depth-weighted quick-union, no compression.
pub type DepthWeighted = UnionFind<ByDepth>;

/// Size-weighted quick-union, no compression.
pub type SizeWeighted = UnionFind<BySize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    Off,
    Halving,
}

/// Array-backed union-find over sites `0..n`, parameterized by a balancing
/// policy. A root satisfies `parent[i] == i`; every site reaches its root by
/// following parent links. Weights start at 1 and are only meaningful at
/// roots (see [`Balance`] for per-policy staleness rules).
pub struct UnionFind<B: Balance> {
    parent: Vec<usize>,
    weight: Vec<usize>,
    count: usize,
    compression: Compression,
    _balance: PhantomData<B>,
}

impl UnionFind<ByHeight> {
    /// Create `n` singleton sites. `path_compression` enables single-pass
    /// path halving in [`find`](Self::find).
    pub fn new(n: usize, path_compression: bool) -> Self {
        let compression = if path_compression {
            Compression::Halving
        } else {
            Compression::Off
        };
        Self::with_compression(n, compression)
    }

    /// Toggle path halving. Turning it off makes `find` a pure traversal,
    /// which is useful when inspecting tree shape.
    pub fn set_path_compression(&mut self, path_compression: bool) {
        self.compression = if path_compression {
            Compression::Halving
        } else {
            Compression::Off
        };
    }

    pub fn path_compression(&self) -> bool {
        self.compression == Compression::Halving
    }
}

impl UnionFind<ByDepth> {
    /// Create `n` singleton sites.
    pub fn new(n: usize) -> Self {
        Self::with_compression(n, Compression::Off)
    }
}

impl UnionFind<BySize> {
    /// Create `n` singleton sites.
    pub fn new(n: usize) -> Self {
        Self::with_compression(n, Compression::Off)
    }
}

impl<B: Balance> UnionFind<B> {
    fn with_compression(n: usize, compression: Compression) -> Self {
        Self {
            parent: (0..n).collect(),
            weight: vec![1; n],
            count: n,
            compression,
            _balance: PhantomData,
        }
    }

    /// Find the root of the component containing `p`.
    ///
    /// With path halving enabled, one parent link is rewritten per call:
    /// `parent[p]` is pointed at its grandparent after the root is located.
    /// The queried site is the only one touched.
    pub fn find(&mut self, p: usize) -> Result<usize, Error> {
        self.validate(p)?;
        let mut root = p;
        while root != self.parent[root] {
            root = self.parent[root];
        }
        if self.compression == Compression::Halving {
            self.parent[p] = self.parent[self.parent[p]];
        }
        Ok(root)
    }

    /// Whether `p` and `q` are in the same component.
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool, Error> {
        self.validate(p)?;
        self.validate(q)?;
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Merge the components containing `p` and `q`. A no-op when they
    /// already share a root. Both indices are validated before any write.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), Error> {
        self.validate(p)?;
        self.validate(q)?;
        // Always re-resolve: compression may have moved links since the
        // caller last looked.
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;
        if root_p == root_q {
            return Ok(());
        }
        B::link(&mut self.parent, &mut self.weight, root_p, root_q);
        self.count -= 1;
        Ok(())
    }

    /// Ensure `p` and `q` are connected, merging only when they are not.
    pub fn connect(&mut self, p: usize, q: usize) -> Result<(), Error> {
        if !self.connected(p, q)? {
            self.union(p, q)?;
        }
        Ok(())
    }

    /// Number of distinct components, between 1 and `n` once `n >= 1`.
    pub fn components(&self) -> usize {
        self.count
    }

    /// Total number of sites `n`.
    pub fn size(&self) -> usize {
        self.parent.len()
    }

    fn validate(&self, p: usize) -> Result<(), Error> {
        let n = self.parent.len();
        if p >= n {
            return Err(Error::SiteOutOfRange { index: p, n });
        }
        Ok(())
    }
}

/// Diagnostic dump: one line per site with its parent and weight. The format
/// is for humans and carries no stability guarantee.
impl<B: Balance> fmt::Display for UnionFind<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}-weighted union-find", B::NAME)?;
        writeln!(f, "  components: {}", self.count)?;
        writeln!(
            f,
            "  path compression: {}",
            self.compression == Compression::Halving
        )?;
        for i in 0..self.parent.len() {
            writeln!(f, "  {i}: parent {}, weight {}", self.parent[i], self.weight[i])?;
        }
        Ok(())
    }
}
