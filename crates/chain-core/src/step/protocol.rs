//! Protocolo mínimo que implementa todo nodo de la cadena.

use async_trait::async_trait;

use crate::model::PipelineContext;

/// Capacidad mínima de un nodo: invocarse sobre un contexto y liberar sus
/// recursos propios.
///
/// La exclusividad de `&mut self` garantiza una sola invocación en vuelo por
/// instancia: ni llamadas concurrentes ni reentrantes sobre el mismo nodo son
/// representables, que es la precondición dura de la capa de caching.
#[async_trait]
pub trait ChainStep: Send {
    /// Ejecuta el protocolo de tres fases de este nodo sobre `ctx`.
    ///
    /// Los fallos de runtime de los hooks no se propagan: quedan anotados en
    /// la lista de errores del contexto.
    async fn invoke(&mut self, ctx: &mut PipelineContext);

    /// Libera los recursos propios de este nodo (clientes de red, handles…).
    ///
    /// No cascada al siguiente nodo: es una decisión de diseño, no un olvido.
    /// Seguro de llamar una sola vez; por defecto no hay nada que liberar.
    async fn dispose(&mut self) {}

    /// Punto de entrada para el dueño de la cadena completa: libera este
    /// nodo y después el resto de la cadena.
    ///
    /// Con ownership exclusivo del `next`, el único que puede alcanzar los
    /// nodos interiores es quien posee la cabeza; este método le permite
    /// cumplir con su responsabilidad de liberar todos los nodos.
    async fn dispose_chain(&mut self) {
        self.dispose().await;
    }
}

/// Nodo empaquetado, tal como circula por el builder y por los hooks core.
pub type BoxedStep = Box<dyn ChainStep>;
