use std::sync::Arc;

use num_complex::Complex;

use crate::math::Scalar;

use super::component::Component;

/// Connection topology for a collection of components.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Series connection (impedances add linearly).
    Series,
    /// Parallel connection (admittances add linearly).
    Parallel,
}

/// Aggregate network that groups components (or nested networks) with a shared connection style.
#[derive(Clone)]
pub struct Network {
    name: String,
    connection: ConnectionKind,
    members: Vec<Arc<dyn Component + Send + Sync>>,
}

impl Network {
    /// Creates a new network.
    #[must_use]
    pub fn new(name: impl Into<String>, connection: ConnectionKind) -> Self {
        Self {
            name: name.into(),
            connection,
            members: Vec::new(),
        }
    }

    /// Adds a component to the network.
    pub fn add_component<C>(&mut self, component: C)
    where
        C: Component + Send + Sync + 'static,
    {
        self.members.push(Arc::new(component));
    }

    /// Builder-style variant of [`add_component`](Self::add_component).
    #[must_use]
    pub fn with_component<C>(mut self, component: C) -> Self
    where
        C: Component + Send + Sync + 'static,
    {
        self.add_component(component);
        self
    }
}

impl Component for Network {
    fn impedance(&self, omega: Scalar) -> Complex<Scalar> {
        match self.connection {
            ConnectionKind::Series => self
                .members
                .iter()
                .map(|member| member.impedance(omega))
                .sum(),
            ConnectionKind::Parallel => {
                let mut admittance = Complex::<Scalar>::default();
                for member in &self.members {
                    let z = member.impedance(omega);
                    if z == Complex::default() {
                        return z;
                    }
                    // An open member carries no current.
                    if z.is_infinite() {
                        continue;
                    }
                    admittance += z.finv();
                }

                if admittance == Complex::default() {
                    Complex::new(Scalar::INFINITY, 0.0)
                } else {
                    admittance.finv()
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.members.iter().map(|m| m.name()).collect();
        f.debug_struct("Network")
            .field("name", &self.name)
            .field("connection", &self.connection)
            .field("members", &names)
            .finish()
    }
}
