mod edge_circle_manifold;
mod polygon_polygon_manifold;
